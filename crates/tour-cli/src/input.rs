//! Prompt-and-reprompt integer input.

use std::io::{self, BufRead, Write};
use tour_core::{MAX_SIZE, MIN_SIZE};

/// Why a line of input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotAnInteger,
    OutOfBounds,
}

/// Prompt for the board side length.
pub fn prompt_size() -> io::Result<usize> {
    prompt_bounded(
        &format!("Type in the size of the board (from {MIN_SIZE} to {MAX_SIZE}): "),
        MIN_SIZE,
        MAX_SIZE,
    )
}

/// Prompt for the starting row.
pub fn prompt_row(size: usize) -> io::Result<usize> {
    prompt_bounded(
        &format!("Type in starting row (from 0 to {}): ", size - 1),
        0,
        size - 1,
    )
}

/// Prompt for the starting column.
pub fn prompt_col(size: usize) -> io::Result<usize> {
    prompt_bounded(
        &format!("Type in starting column (from 0 to {}): ", size - 1),
        0,
        size - 1,
    )
}

/// Print `prompt` once, then read lines until one parses to an integer
/// in `[min, max]`, re-prompting on every rejected line.
fn prompt_bounded(prompt: &str, min: usize, max: usize) -> io::Result<usize> {
    print!("{prompt}");
    io::stdout().flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match parse_bounded(&line?, min, max) {
            Ok(value) => return Ok(value),
            Err(Rejection::NotAnInteger) => {
                println!("You did not input an integer, try again:")
            }
            Err(Rejection::OutOfBounds) => {
                println!("The integer is not within the boundaries, try again:")
            }
        }
    }

    Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "input ended before a valid integer was read",
    ))
}

/// Parse one line as an integer in `[min, max]`. Negative numbers are
/// integers out of bounds, not parse failures.
pub fn parse_bounded(line: &str, min: usize, max: usize) -> Result<usize, Rejection> {
    let value: i64 = line
        .trim()
        .parse()
        .map_err(|_| Rejection::NotAnInteger)?;
    if value >= min as i64 && value <= max as i64 {
        Ok(value as usize)
    } else {
        Err(Rejection::OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_in_bounds() {
        assert_eq!(parse_bounded("8", 3, 64), Ok(8));
        assert_eq!(parse_bounded("  3 ", 3, 64), Ok(3));
        assert_eq!(parse_bounded("64", 3, 64), Ok(64));
    }

    #[test]
    fn test_parse_rejects_out_of_bounds() {
        assert_eq!(parse_bounded("2", 3, 64), Err(Rejection::OutOfBounds));
        assert_eq!(parse_bounded("65", 3, 64), Err(Rejection::OutOfBounds));
        assert_eq!(parse_bounded("-1", 0, 7), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!(parse_bounded("five", 3, 64), Err(Rejection::NotAnInteger));
        assert_eq!(parse_bounded("4.5", 3, 64), Err(Rejection::NotAnInteger));
        assert_eq!(parse_bounded("", 3, 64), Err(Rejection::NotAnInteger));
    }
}
