//! A Befunge-93 execution engine.
//!
//! The program text is a toroidal 25x80 grid that is itself addressable,
//! mutable memory: `p` rewrites cells the pointer later executes. The engine
//! owns the grid, the operand stack, the instruction pointer and the
//! sub-mode (normal / string / skip), and steps one cycle at a time until
//! `@` halts it or a fatal condition surfaces.
//!
//! ```
//! use befunge93::{Interpreter, Playfield, ScriptedPort};
//!
//! let grid = Playfield::from_source("54+.@");
//! let mut engine = Interpreter::new(grid, ScriptedPort::new());
//! engine.run().unwrap();
//! assert_eq!(engine.port.output(), "9 ");
//! ```

// ═══════════════════════════════════════════════════════════════════════════
// Layer 0: Core (No internal dependencies)
// ═══════════════════════════════════════════════════════════════════════════
pub mod core;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 1: Runtime edges (depends on core)
// ═══════════════════════════════════════════════════════════════════════════
pub mod runtime;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 2: Engine (depends on core, runtime)
// ═══════════════════════════════════════════════════════════════════════════
pub mod engine;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 3: Tooling (depends on all)
// ═══════════════════════════════════════════════════════════════════════════
pub mod tooling;

// Re-export primary types at crate root
pub use crate::core::{
    BefResult, BefungeError, Direction, DirectionSource, ErrorCategory, GridOperation,
    InstructionPointer, OperandStack, Playfield, RandomDirections, ScriptedDirections,
    HEIGHT, WIDTH,
};
pub use engine::{CycleView, ExecStatus, Inspector, Interpreter, InterpreterConfig, Mode};
pub use runtime::{load_file, ConsolePort, IoPort, ScriptedPort};
pub use tooling::ConsoleInspector;
