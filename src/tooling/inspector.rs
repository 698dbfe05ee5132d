//! Console inspector for the step-by-step diagnostic mode.
//!
//! Before every cycle the inspector blocks until the host presses Enter,
//! then prints the pointer position and the cell under it; after the cycle
//! it prints the stack. The pause is entirely external to the engine's own
//! state machine: the engine hands out read-only views and nothing more.

use std::io::{self, BufRead};

use crate::engine::interpreter::{CycleView, Inspector};

/// Pauses on stdin and prints engine state around every cycle.
#[derive(Debug, Default)]
pub struct ConsoleInspector;

impl ConsoleInspector {
    pub fn new() -> Self {
        Self
    }
}

impl Inspector for ConsoleInspector {
    fn before_cycle(&mut self, view: &CycleView<'_>) {
        // Continue signal: one line from the host, contents ignored.
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);

        println!("PC: ({}, {})", view.x, view.y);
        println!("character: {:?}", view.cell as char);
    }

    fn after_cycle(&mut self, stack: &[i64]) {
        println!("stack: {:?}", stack);
    }
}
