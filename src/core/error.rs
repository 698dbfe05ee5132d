//! Error types for the Befunge-93 engine.
//!
//! All fatal conditions are represented by a single enum so the host sees
//! one descriptive failure. There is no retry or partial-failure semantics:
//! the engine stops on the first error and the error bubbles up unchanged.
//!
//! Stack underflow is deliberately *not* an error. Popping an empty operand
//! stack yields zero by definition (see [`crate::core::stack::OperandStack`]).
//!
//! Division by zero and off-canvas `g`/`p` coordinates are explicit errors,
//! surfaced the same way as an unrecognized instruction.

use std::fmt;

/// Grid operation that triggered an out-of-bounds access, for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOperation {
    /// The `g` instruction (read a cell).
    Get,
    /// The `p` instruction (write a cell).
    Put,
}

impl fmt::Display for GridOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridOperation::Get => write!(f, "get"),
            GridOperation::Put => write!(f, "put"),
        }
    }
}

/// Fatal conditions that stop the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BefungeError {
    /// Program source could not be read. Surfaced before any execution.
    Load {
        path: String,
        message: String,
    },

    /// Input port exhausted, or the supplied text does not parse.
    Input {
        message: String,
    },

    /// Output port failed to write.
    Output {
        message: String,
    },

    /// A cell outside the instruction set was reached in normal mode.
    UnrecognizedInstruction {
        character: u8,
        x: usize,
        y: usize,
    },

    /// Division by zero in the `/` instruction.
    DivisionByZero {
        dividend: i64,
        x: usize,
        y: usize,
    },

    /// Modulo by zero in the `%` instruction.
    ModuloByZero {
        dividend: i64,
        x: usize,
        y: usize,
    },

    /// `g`/`p` coordinates outside the 80x25 canvas.
    OutOfBounds {
        x: i64,
        y: i64,
        operation: GridOperation,
    },

    /// The configured cycle budget was exhausted (runaway-program guard).
    CycleLimitExceeded {
        limit: u64,
    },
}

impl fmt::Display for BefungeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BefungeError::Load { path, message } => {
                write!(f, "could not load '{}': {}", path, message)
            }
            BefungeError::Input { message } => {
                write!(f, "input error: {}", message)
            }
            BefungeError::Output { message } => {
                write!(f, "output error: {}", message)
            }
            BefungeError::UnrecognizedInstruction { character, x, y } => {
                write!(
                    f,
                    "unrecognized instruction {:?} at ({}, {})",
                    *character as char, x, y
                )
            }
            BefungeError::DivisionByZero { dividend, x, y } => {
                write!(f, "division by zero: {} / 0 at ({}, {})", dividend, x, y)
            }
            BefungeError::ModuloByZero { dividend, x, y } => {
                write!(f, "modulo by zero: {} % 0 at ({}, {})", dividend, x, y)
            }
            BefungeError::OutOfBounds { x, y, operation } => {
                write!(f, "{} coordinates ({}, {}) outside the canvas", operation, x, y)
            }
            BefungeError::CycleLimitExceeded { limit } => {
                write!(f, "cycle limit exceeded: {} cycles", limit)
            }
        }
    }
}

impl std::error::Error for BefungeError {}

impl BefungeError {
    /// Get the error category for filtering and routing.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BefungeError::Load { .. } => ErrorCategory::Load,
            BefungeError::Input { .. } | BefungeError::Output { .. } => ErrorCategory::Io,
            BefungeError::UnrecognizedInstruction { .. }
            | BefungeError::DivisionByZero { .. }
            | BefungeError::ModuloByZero { .. }
            | BefungeError::OutOfBounds { .. }
            | BefungeError::CycleLimitExceeded { .. } => ErrorCategory::Runtime,
        }
    }
}

/// Error category for filtering and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Io,
    Runtime,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Load => write!(f, "load"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Runtime => write!(f, "runtime"),
        }
    }
}

/// Result type alias for engine operations.
pub type BefResult<T> = Result<T, BefungeError>;
