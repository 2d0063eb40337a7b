//! Choose-one-of-N control
//!
//! A single line showing the prompt followed by every option, the current
//! one in inverse video. Left/Up and Right/Down move with wrap-around,
//! Enter commits. The state machine is separate from the terminal so it can
//! be driven by tests.
//!
//! Without a terminal (piped input) the same choice is asked as a numbered
//! line prompt instead.

use std::io::{self, Write};

use termion::event::Key;
use termion::{clear, style};

/// A navigation step decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Previous,
    Next,
    Commit,
    Cancel,
    Ignore,
}

impl From<Key> for Nav {
    fn from(key: Key) -> Self {
        match key {
            Key::Left | Key::Up => Nav::Previous,
            Key::Right | Key::Down => Nav::Next,
            Key::Char('\n') | Key::Char('\r') => Nav::Commit,
            Key::Esc | Key::Ctrl('c') | Key::Ctrl('d') => Nav::Cancel,
            _ => Nav::Ignore,
        }
    }
}

/// Where the selector stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Pending,
    Committed(usize),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct OptionSelector {
    len: usize,
    selected: usize,
}

impl OptionSelector {
    /// # Panics
    /// Panics if `len == 0`.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "selector needs at least one option");
        Self { len, selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn apply(&mut self, nav: Nav) -> Selection {
        match nav {
            Nav::Previous => {
                self.selected = (self.selected + self.len - 1) % self.len;
                Selection::Pending
            }
            Nav::Next => {
                self.selected = (self.selected + 1) % self.len;
                Selection::Pending
            }
            Nav::Commit => Selection::Committed(self.selected),
            Nav::Cancel => Selection::Cancelled,
            Nav::Ignore => Selection::Pending,
        }
    }
}

/// Redraw the whole selector line in place.
pub fn render<W: Write>(
    out: &mut W,
    prompt: &str,
    options: &[&str],
    selected: usize,
) -> io::Result<()> {
    write!(out, "\r{}{}", clear::CurrentLine, prompt)?;
    for (idx, option) in options.iter().enumerate() {
        if idx == selected {
            write!(out, " {}{} {}", style::Invert, option, style::Reset)?;
        } else {
            write!(out, "  {} ", option)?;
        }
    }
    out.flush()
}

/// Prompt for the line-based fallback, options numbered from 1.
pub fn numbered_prompt(prompt: &str, options: &[&str]) -> String {
    let listed: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| format!("[{}] {}", idx + 1, option))
        .collect();
    format!("{} {}: ", prompt, listed.join("  "))
}

/// Zero-based index for a typed 1-based option number.
pub fn parse_option_number(line: &str, len: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(number) if (1..=len).contains(&number) => Some(number - 1),
        _ => None,
    }
}
