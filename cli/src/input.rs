//! Parsing and re-prompting for typed answers

use monty_hall_core::{MAX_DOORS, MIN_DOORS};
use tracing::debug;

use crate::console::Console;
use crate::error::{CliError, InputError};

fn parse_integer<T: std::str::FromStr>(line: &str) -> Result<T, InputError> {
    line.trim().parse().map_err(|_| InputError::NotAnInteger)
}

pub fn parse_trial_count(line: &str) -> Result<u64, InputError> {
    parse_integer(line)
}

pub fn parse_total_doors(line: &str) -> Result<usize, InputError> {
    let doors = parse_integer(line)?;
    if doors < MIN_DOORS {
        return Err(InputError::TooFewDoors { min: MIN_DOORS });
    }
    if doors > MAX_DOORS {
        return Err(InputError::TooManyDoors { max: MAX_DOORS });
    }
    Ok(doors)
}

/// `total_doors` must already have passed [`parse_total_doors`].
pub fn parse_open_doors(line: &str, total_doors: usize) -> Result<usize, InputError> {
    let open = parse_integer(line)?;
    let max = total_doors.saturating_sub(2);
    if open > max {
        return Err(InputError::TooManyOpenDoors { max });
    }
    Ok(open)
}

/// Ask until `parse` accepts the answer
///
/// Each rejection prints the error and asks again. Returns `Ok(None)` when
/// input ends.
pub fn prompt_until_valid<C, T, F>(
    console: &mut C,
    prompt: &str,
    parse: F,
) -> Result<Option<T>, CliError>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!(input = %line, error = %err, "rejected input");
                console.write_line(&err.to_string())?;
            }
        }
    }
}
