//! Terminal access for the shell
//!
//! The shell talks to a [`Console`] so the round loop can run against a
//! real terminal or a scripted one in tests.

use std::io::{self, BufRead, Write};

use termion::input::TermRead;
use termion::raw::IntoRawMode;

use crate::select::{numbered_prompt, parse_option_number, render, OptionSelector, Selection};

pub trait Console {
    /// Show `prompt` and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Let the user pick one of `options`. `None` if they cancel or input ends.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> io::Result<Option<usize>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Block until any key is pressed.
    fn wait_for_key(&mut self) -> io::Result<()>;
}

/// Console on the process's stdin/stdout.
///
/// Line input uses the terminal's cooked mode; the option selector and
/// the final key wait switch to raw mode only while they run. When stdin or
/// stdout is not a terminal, choices are read as numbered lines and the
/// final key wait reads one line.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }

    fn is_interactive() -> bool {
        termion::is_tty(&io::stdin()) && termion::is_tty(&io::stdout())
    }
}

/// Ask for a choice as a typed option number, re-asking until it is in range.
///
/// `None` at end of input.
pub fn choose_by_number<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    options: &[&str],
) -> io::Result<Option<usize>> {
    let prompt = numbered_prompt(prompt, options);
    loop {
        let Some(line) = console.read_line(&prompt)? else {
            return Ok(None);
        };
        if let Some(idx) = parse_option_number(&line, options.len()) {
            return Ok(Some(idx));
        }
        console.write_line(&format!("Please enter a number from 1 to {}.", options.len()))?;
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        // TermRead also defines read_line; this is the buffered one
        if BufRead::read_line(&mut io::stdin().lock(), &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> io::Result<Option<usize>> {
        if !Self::is_interactive() {
            return choose_by_number(self, prompt, options);
        }

        let mut selector = OptionSelector::new(options.len());
        let mut stdout = io::stdout().into_raw_mode()?;
        render(&mut stdout, prompt, options, selector.selected())?;

        let mut choice = None;
        for key in io::stdin().keys() {
            match selector.apply(key?.into()) {
                Selection::Pending => render(&mut stdout, prompt, options, selector.selected())?,
                Selection::Committed(idx) => {
                    choice = Some(idx);
                    break;
                }
                Selection::Cancelled => break,
            }
        }

        write!(stdout, "\r\n")?;
        stdout.flush()?;
        Ok(choice)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{}", line)
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        if !Self::is_interactive() {
            self.read_line("")?;
            return Ok(());
        }

        let mut stdout = io::stdout().into_raw_mode()?;
        stdout.flush()?;
        if let Some(key) = io::stdin().keys().next() {
            key?;
        }
        write!(stdout, "\r\n")?;
        stdout.flush()
    }
}

/// Console fed from fixed answers, recording everything shown.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: std::collections::VecDeque<String>,
    choices: std::collections::VecDeque<usize>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
    pub keys_waited: usize,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(lines: &[&str], choices: &[usize]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            choices: choices.iter().copied().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> io::Result<Option<usize>> {
        self.prompts.push(prompt.to_string());
        Ok(self.choices.pop_front().filter(|&idx| idx < options.len()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.keys_waited += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_choice_reasks_until_in_range() {
        let mut console = ScriptedConsole::new(&["yes", "3", "2"], &[]);
        let choice = choose_by_number(&mut console, "Play again?", &["Yes", "No"]).unwrap();

        assert_eq!(choice, Some(1));
        assert_eq!(console.prompts, vec!["Play again? [1] Yes  [2] No: "; 3]);
        assert_eq!(console.output, vec!["Please enter a number from 1 to 2."; 2]);
    }

    #[test]
    fn test_numbered_choice_ends_with_input() {
        let mut console = ScriptedConsole::new(&[], &[]);
        assert_eq!(choose_by_number(&mut console, "Switch?", &["Yes", "No"]).unwrap(), None);
    }
}
