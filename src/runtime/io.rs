//! I/O ports for the Befunge-93 engine.
//!
//! The `&`, `~`, `.` and `,` instructions never touch the console directly:
//! they go through the [`IoPort`] trait, so the engine can be driven by real
//! standard streams in the binary and by scripted values in tests.
//!
//! # Port Contract
//!
//! - `request_integer` blocks until a value is supplied; fails if the source
//!   is exhausted or the text does not parse as an integer.
//! - `request_character` blocks until a character is supplied; fails if none
//!   is available. If more than one character is supplied, all but the first
//!   are discarded and the discard is observable (a console notice, or the
//!   [`ScriptedPort::discarded`] record).
//! - `emit_integer` writes the decimal representation followed by one space,
//!   no newline.
//! - `emit_character` writes exactly one character.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::core::error::{BefResult, BefungeError};

/// The engine's window onto the outside world.
pub trait IoPort {
    /// Request one integer from the input source.
    fn request_integer(&mut self) -> BefResult<i64>;

    /// Request one character from the input source, returning its code.
    fn request_character(&mut self) -> BefResult<u8>;

    /// Write a decimal integer followed by a separating space.
    fn emit_integer(&mut self, value: i64) -> BefResult<()>;

    /// Write a single character.
    fn emit_character(&mut self, code: u8) -> BefResult<()>;
}

fn output_err(err: io::Error) -> BefungeError {
    BefungeError::Output {
        message: err.to_string(),
    }
}

/// Console-backed port: prompts on stdout, reads lines from stdin.
#[derive(Debug, Default)]
pub struct ConsolePort;

impl ConsolePort {
    pub fn new() -> Self {
        Self
    }

    /// Print a prompt and read one line, without its trailing newline.
    fn prompt_line(&mut self, prompt: &str) -> BefResult<String> {
        let mut out = io::stdout();
        write!(out, "{}", prompt).map_err(output_err)?;
        out.flush().map_err(output_err)?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line).map_err(|_| BefungeError::Input {
            message: "error reading input".to_string(),
        })?;
        if read == 0 {
            return Err(BefungeError::Input {
                message: "input exhausted".to_string(),
            });
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

impl IoPort for ConsolePort {
    fn request_integer(&mut self) -> BefResult<i64> {
        let line = self.prompt_line("Enter a number: ")?;
        line.parse().map_err(|_| BefungeError::Input {
            message: format!("invalid number {:?}", line),
        })
    }

    fn request_character(&mut self) -> BefResult<u8> {
        let line = self.prompt_line("Enter a character: ")?;
        let bytes = line.as_bytes();
        match bytes.first() {
            None => Err(BefungeError::Input {
                message: "no character supplied".to_string(),
            }),
            Some(&first) => {
                if bytes.len() > 1 {
                    eprintln!("ignoring extra characters, input is {:?}", first as char);
                }
                Ok(first)
            }
        }
    }

    fn emit_integer(&mut self, value: i64) -> BefResult<()> {
        let mut out = io::stdout();
        write!(out, "{} ", value).map_err(output_err)?;
        out.flush().map_err(output_err)
    }

    fn emit_character(&mut self, code: u8) -> BefResult<()> {
        let mut out = io::stdout();
        write!(out, "{}", code as char).map_err(output_err)?;
        out.flush().map_err(output_err)
    }
}

/// Scripted port for tests: queued input lines, captured output.
///
/// Input is held as *lines* rather than parsed values so the parse failure
/// path behaves exactly like the console port.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPort {
    integer_lines: VecDeque<String>,
    character_lines: VecDeque<String>,
    output: String,
    discarded: Vec<String>,
}

impl ScriptedPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integers to be returned by `request_integer`, in order.
    pub fn integers(mut self, values: &[i64]) -> Self {
        self.integer_lines.extend(values.iter().map(|v| v.to_string()));
        self
    }

    /// Queue a raw line for `request_integer` (may be unparsable on purpose).
    pub fn integer_line(mut self, line: impl Into<String>) -> Self {
        self.integer_lines.push_back(line.into());
        self
    }

    /// Queue input lines for `request_character`, in order. Each call to
    /// `request_character` consumes one whole line and uses its first byte.
    pub fn characters(mut self, lines: &[&str]) -> Self {
        self.character_lines.extend(lines.iter().map(|s| s.to_string()));
        self
    }

    /// Everything the program has written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Tails of character input lines that were discarded beyond the first
    /// byte, oldest first.
    pub fn discarded(&self) -> &[String] {
        &self.discarded
    }
}

impl IoPort for ScriptedPort {
    fn request_integer(&mut self) -> BefResult<i64> {
        let line = self.integer_lines.pop_front().ok_or_else(|| BefungeError::Input {
            message: "input exhausted".to_string(),
        })?;
        line.parse().map_err(|_| BefungeError::Input {
            message: format!("invalid number {:?}", line),
        })
    }

    fn request_character(&mut self) -> BefResult<u8> {
        let line = self.character_lines.pop_front().ok_or_else(|| BefungeError::Input {
            message: "input exhausted".to_string(),
        })?;
        let bytes = line.as_bytes();
        match bytes.first() {
            None => Err(BefungeError::Input {
                message: "no character supplied".to_string(),
            }),
            Some(&first) => {
                if bytes.len() > 1 {
                    self.discarded.push(line[1..].to_string());
                }
                Ok(first)
            }
        }
    }

    fn emit_integer(&mut self, value: i64) -> BefResult<()> {
        self.output.push_str(&format!("{} ", value));
        Ok(())
    }

    fn emit_character(&mut self, code: u8) -> BefResult<()> {
        self.output.push(code as char);
        Ok(())
    }
}
