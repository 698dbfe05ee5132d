//! Core types for the Befunge-93 engine.
//!
//! The fundamental data model:
//!
//! - **Playfield**: the mutable 25x80 grid of 8-bit cells
//! - **OperandStack**: LIFO integer storage that never underflows visibly
//! - **InstructionPointer**: canvas position plus cardinal direction
//! - **Error**: the fatal-condition hierarchy
//!
//! # Layer 0 - No Internal Dependencies
//!
//! This module has no dependencies on other engine modules, allowing it to
//! be imported by all other layers.

pub mod error;
pub mod grid;
pub mod ip;
pub mod stack;

// Re-export primary types at module level
pub use error::{BefResult, BefungeError, ErrorCategory, GridOperation};
pub use grid::{Playfield, HEIGHT, WIDTH};
pub use ip::{
    Direction, DirectionSource, InstructionPointer, RandomDirections, ScriptedDirections,
};
pub use stack::OperandStack;
