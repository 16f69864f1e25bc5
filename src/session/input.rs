//! Line-based console input.
//!
//! Every read consumes exactly one line, so numbers and free text never leave
//! stray newlines for each other. Numeric reads re-prompt until the line
//! parses and passes the caller's check; only end-of-input or an I/O failure
//! escapes.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use super::SessionError;
use crate::core::GameError;
use crate::territory::{Registry, TerritoryId};

/// Why a single line of input was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Not a whole number.
    #[error("'{input}' is not a whole number")]
    Malformed {
        /// The offending text, trimmed.
        input: String,
    },

    /// A count that cannot be negative was.
    #[error("{value} is negative")]
    Negative {
        /// Parsed value.
        value: i64,
    },

    /// Below the smallest accepted value.
    #[error("{value} is below the minimum of {min}")]
    TooSmall {
        /// Parsed value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
    },

    /// Too large to store.
    #[error("{value} is too large")]
    TooLarge {
        /// Parsed value.
        value: i64,
    },

    /// Parsed fine but the game refused it.
    #[error(transparent)]
    Rejected(#[from] GameError),
}

/// Parse a whole number, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns `InputError::Malformed` if the text is not an integer.
pub fn parse_integer(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| InputError::Malformed {
        input: trimmed.to_string(),
    })
}

/// Parse a non-negative troop count.
///
/// # Errors
///
/// Returns `InputError::Malformed`, `Negative` or `TooLarge`.
pub fn parse_troops(text: &str) -> Result<u32, InputError> {
    parse_integer(text).and_then(troops_from)
}

fn troops_from(value: i64) -> Result<u32, InputError> {
    if value < 0 {
        return Err(InputError::Negative { value });
    }
    u32::try_from(value).map_err(|_| InputError::TooLarge { value })
}

/// Prompts on an output sink and reads answers from a line source.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    bytes: Vec<u8>,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input source and an output sink.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            bytes: Vec::new(),
            line: String::new(),
        }
    }

    /// The output sink, for display code.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Unwrap into the input source and output sink.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its line terminator.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a numeric read sees a
    /// malformed number and free text keeps the rest of the line.
    fn next_line(&mut self) -> Result<&str, SessionError> {
        self.bytes.clear();
        if self.input.read_until(b'\n', &mut self.bytes)? == 0 {
            return Err(SessionError::InputClosed);
        }
        self.line = String::from_utf8_lossy(&self.bytes).into_owned();
        Ok(self.line.trim_end_matches(&['\n', '\r'][..]))
    }

    /// Prompt and read one free-text line.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.prompt(prompt)?;
        Ok(self.next_line()?.to_string())
    }

    /// Prompt for an integer and re-prompt until `check` accepts it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` at end of input; rejected lines
    /// never surface as errors.
    pub fn read_checked<T>(
        &mut self,
        prompt: &str,
        mut check: impl FnMut(i64) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        self.prompt(prompt)?;
        loop {
            let attempt = parse_integer(self.next_line()?).and_then(&mut check);
            match attempt {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, "input rejected");
                    self.prompt(&format!("Invalid value: {err}. Try again: "))?;
                }
            }
        }
    }

    /// Prompt for a count of at least `min`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` at end of input.
    pub fn read_count(&mut self, prompt: &str, min: usize) -> Result<usize, SessionError> {
        self.read_checked(prompt, |value| {
            let min_i64 = i64::try_from(min).unwrap_or(i64::MAX);
            if value < min_i64 {
                return Err(InputError::TooSmall { value, min: min_i64 });
            }
            usize::try_from(value).map_err(|_| InputError::TooLarge { value })
        })
    }

    /// Prompt for a non-negative troop count.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` at end of input.
    pub fn read_troops(&mut self, prompt: &str) -> Result<u32, SessionError> {
        self.read_checked(prompt, troops_from)
    }

    /// Prompt for a 1-based territory number valid in `registry`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` at end of input.
    pub fn read_territory(
        &mut self,
        registry: &Registry,
        role: &str,
    ) -> Result<TerritoryId, SessionError> {
        let prompt = format!(
            "Choose the {role} territory number (1 to {}): ",
            registry.len()
        );
        self.read_checked(&prompt, |value| {
            if value < 1 {
                return Err(InputError::TooSmall { value, min: 1 });
            }
            let number = usize::try_from(value).map_err(|_| InputError::TooLarge { value })?;
            Ok(registry.id_from_number(number)?)
        })
    }

    /// Prompt for a yes/no style answer and return it trimmed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` at end of input.
    pub fn read_answer(&mut self, prompt: &str) -> Result<String, SessionError> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }
}
