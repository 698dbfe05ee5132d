//! The dispatcher: a single stepping loop over playfield, stack and pointer.
//!
//! One cycle handles the current sub-mode in priority order:
//!
//! 1. `SkipOne`: reset to `Normal`, advance the pointer, execute nothing.
//! 2. `StringMode`: a `"` cell exits the mode, any other cell pushes its
//!    character code. Advance the pointer.
//! 3. `Normal`: dispatch on the cell's character code, then advance.
//!
//! The cell under the pointer is re-read every cycle. Instructions are never
//! cached, so a cell rewritten by `p` executes with its new value even when
//! the pointer is already heading for it.
//!
//! Stack order convention: instructions that pop two values pop `b` then
//! `a`, i.e. `a` was pushed before `b`.

use crate::core::error::{BefResult, BefungeError, GridOperation};
use crate::core::grid::Playfield;
use crate::core::ip::{Direction, DirectionSource, InstructionPointer, RandomDirections};
use crate::core::stack::OperandStack;
use crate::runtime::io::IoPort;

/// The engine's sub-mode. Mutually exclusive, held as engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Dispatch cells as instructions.
    Normal,
    /// Push cell codes verbatim until a closing `"`.
    StringMode,
    /// Skip the next cell without executing it (the `#` trampoline).
    SkipOne,
}

/// Execution status of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    /// The engine will execute further cycles.
    Running,
    /// The engine reached `@` and is in its terminal state.
    Halted,
}

/// Configuration for the interpreter.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Maximum cycles before the run is aborted. 0 means unlimited.
    pub max_cycles: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_cycles: 0 }
    }
}

/// Snapshot of the engine handed to an [`Inspector`] before a cycle.
#[derive(Debug)]
pub struct CycleView<'a> {
    /// Pointer column.
    pub x: usize,
    /// Pointer row.
    pub y: usize,
    /// The cell under the pointer.
    pub cell: u8,
    /// Stack contents, bottom first.
    pub stack: &'a [i64],
}

/// Host hook for the diagnostic mode.
///
/// `before_cycle` may block (the console inspector waits for a continue
/// signal); it receives a read-only view and must not alter engine state.
pub trait Inspector {
    /// Called before each cycle with the pointer position, the cell under
    /// the pointer and the stack contents.
    fn before_cycle(&mut self, view: &CycleView<'_>);

    /// Called after each cycle with the stack contents.
    fn after_cycle(&mut self, stack: &[i64]);
}

/// The Befunge-93 execution engine.
///
/// Owns the playfield, the operand stack, the instruction pointer and the
/// sub-mode; there is no ambient global state. The I/O port and the
/// direction source for `?` are injected so the engine runs against the
/// console in the binary and against scripted values in tests.
pub struct Interpreter<P: IoPort, D: DirectionSource = RandomDirections> {
    grid: Playfield,
    stack: OperandStack,
    ip: InstructionPointer,
    mode: Mode,
    status: ExecStatus,
    cycles: u64,
    config: InterpreterConfig,
    directions: D,
    /// The I/O port. Public so hosts and tests can inspect captured output.
    pub port: P,
}

impl<P: IoPort> Interpreter<P> {
    /// Create an engine over `grid` with the default random `?` source.
    pub fn new(grid: Playfield, port: P) -> Self {
        Self::with_directions(grid, port, RandomDirections)
    }
}

impl<P: IoPort, D: DirectionSource> Interpreter<P, D> {
    /// Create an engine with an explicit direction source.
    pub fn with_directions(grid: Playfield, port: P, directions: D) -> Self {
        Self {
            grid,
            stack: OperandStack::new(),
            ip: InstructionPointer::new(),
            mode: Mode::Normal,
            status: ExecStatus::Running,
            cycles: 0,
            config: InterpreterConfig::default(),
            directions,
            port,
        }
    }

    /// Set the cycle budget (0 = unlimited).
    pub fn with_max_cycles(mut self, max_cycles: u64) -> Self {
        self.config.max_cycles = max_cycles;
        self
    }

    /// The playfield in its current (possibly self-modified) state.
    pub fn grid(&self) -> &Playfield {
        &self.grid
    }

    /// The operand stack.
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    /// The instruction pointer.
    pub fn ip(&self) -> &InstructionPointer {
        &self.ip
    }

    /// Current sub-mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current execution status.
    pub fn status(&self) -> ExecStatus {
        self.status
    }

    /// Number of cycles executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run until the engine halts or a fatal condition surfaces.
    pub fn run(&mut self) -> BefResult<()> {
        self.run_loop(None)
    }

    /// Run with a diagnostic inspector attached.
    pub fn run_with_inspector(&mut self, inspector: &mut dyn Inspector) -> BefResult<()> {
        self.run_loop(Some(inspector))
    }

    fn run_loop(&mut self, mut inspector: Option<&mut dyn Inspector>) -> BefResult<()> {
        while self.status == ExecStatus::Running {
            if self.config.max_cycles > 0 && self.cycles >= self.config.max_cycles {
                return Err(BefungeError::CycleLimitExceeded {
                    limit: self.config.max_cycles,
                });
            }
            if let Some(ins) = inspector.as_deref_mut() {
                ins.before_cycle(&CycleView {
                    x: self.ip.x,
                    y: self.ip.y,
                    cell: self.grid.read(self.ip.x, self.ip.y),
                    stack: self.stack.as_slice(),
                });
            }
            self.cycle()?;
            if let Some(ins) = inspector.as_deref_mut() {
                ins.after_cycle(self.stack.as_slice());
            }
        }
        Ok(())
    }

    /// Execute one cycle: handle the sub-mode, dispatch the cell under the
    /// pointer, advance the pointer. No-op on a halted engine.
    pub fn cycle(&mut self) -> BefResult<()> {
        if self.status == ExecStatus::Halted {
            return Ok(());
        }
        self.cycles += 1;

        match self.mode {
            Mode::SkipOne => {
                self.mode = Mode::Normal;
                self.ip.step();
                return Ok(());
            }
            Mode::StringMode => {
                let cell = self.grid.read(self.ip.x, self.ip.y);
                if cell == b'"' {
                    self.mode = Mode::Normal;
                } else {
                    self.stack.push(cell as i64);
                }
                self.ip.step();
                return Ok(());
            }
            Mode::Normal => {}
        }

        let cell = self.grid.read(self.ip.x, self.ip.y);
        self.dispatch(cell)?;
        if self.status == ExecStatus::Running {
            self.ip.step();
        }
        Ok(())
    }

    fn dispatch(&mut self, cell: u8) -> BefResult<()> {
        match cell {
            b'0'..=b'9' => self.stack.push((cell - b'0') as i64),

            b'+' => {
                let b = self.stack.pop();
                let a = self.stack.pop();
                self.stack.push(a.wrapping_add(b));
            }
            b'-' => {
                let b = self.stack.pop();
                let a = self.stack.pop();
                self.stack.push(a.wrapping_sub(b));
            }
            b'*' => {
                let b = self.stack.pop();
                let a = self.stack.pop();
                self.stack.push(a.wrapping_mul(b));
            }
            b'/' => {
                let b = self.stack.pop();
                let a = self.stack.pop();
                if b == 0 {
                    return Err(BefungeError::DivisionByZero {
                        dividend: a,
                        x: self.ip.x,
                        y: self.ip.y,
                    });
                }
                // Truncates toward zero.
                self.stack.push(a.wrapping_div(b));
            }
            b'%' => {
                let b = self.stack.pop();
                let a = self.stack.pop();
                if b == 0 {
                    return Err(BefungeError::ModuloByZero {
                        dividend: a,
                        x: self.ip.x,
                        y: self.ip.y,
                    });
                }
                self.stack.push(a.wrapping_rem(b));
            }

            b'!' => {
                let a = self.stack.pop();
                self.stack.push((a == 0) as i64);
            }
            b'`' => {
                let b = self.stack.pop();
                let a = self.stack.pop();
                self.stack.push((a > b) as i64);
            }

            b'>' => self.ip.direction = Direction::East,
            b'<' => self.ip.direction = Direction::West,
            b'v' => self.ip.direction = Direction::South,
            b'^' => self.ip.direction = Direction::North,
            b'?' => self.ip.direction = self.directions.next_direction(),

            b'_' => {
                let a = self.stack.pop();
                self.ip.direction = if a == 0 { Direction::East } else { Direction::West };
            }
            b'|' => {
                let a = self.stack.pop();
                self.ip.direction = if a == 0 { Direction::South } else { Direction::North };
            }

            b':' => self.stack.dup(),
            b'\\' => self.stack.swap(),
            b'$' => self.stack.discard(),

            b'&' => {
                let value = self.port.request_integer()?;
                self.stack.push(value);
            }
            b'~' => {
                let code = self.port.request_character()?;
                self.stack.push(code as i64);
            }
            b'.' => {
                let value = self.stack.pop();
                self.port.emit_integer(value)?;
            }
            b',' => {
                let value = self.stack.pop();
                self.port.emit_character(value as u8)?;
            }

            b'#' => self.mode = Mode::SkipOne,

            b'g' => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                if !Playfield::contains(x, y) {
                    return Err(BefungeError::OutOfBounds {
                        x,
                        y,
                        operation: GridOperation::Get,
                    });
                }
                let code = self.grid.read(x as usize, y as usize);
                self.stack.push(code as i64);
            }
            b'p' => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let value = self.stack.pop();
                if !Playfield::contains(x, y) {
                    return Err(BefungeError::OutOfBounds {
                        x,
                        y,
                        operation: GridOperation::Put,
                    });
                }
                // Cells hold one byte; the value is truncated on write.
                self.grid.write(x as usize, y as usize, value as u8);
            }

            b'"' => self.mode = Mode::StringMode,
            b'@' => self.status = ExecStatus::Halted,
            b' ' => {}

            other => {
                return Err(BefungeError::UnrecognizedInstruction {
                    character: other,
                    x: self.ip.x,
                    y: self.ip.y,
                });
            }
        }
        Ok(())
    }
}
