//! The execution engine: dispatcher, cycle loop and mode state machine.

pub mod interpreter;

pub use interpreter::{
    CycleView, ExecStatus, Inspector, Interpreter, InterpreterConfig, Mode,
};
