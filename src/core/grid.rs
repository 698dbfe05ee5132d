//! The playfield: mutable program memory for the Befunge-93 engine.
//!
//! A fixed canvas of 25 rows by 80 columns, each cell one 8-bit character
//! code. The grid is loaded once from program text and then mutates in place
//! for the engine's lifetime via the `p` instruction. There is no distinction
//! between code and data: the dispatcher re-reads the cell under the pointer
//! every cycle, so a cell rewritten by `p` executes with its new value.
//!
//! `read`/`write` assume validated coordinates; the dispatcher performs the
//! bounds check for `g`/`p` operands (see [`Playfield::contains`]).

use std::fmt;

/// Canvas width in columns.
pub const WIDTH: usize = 80;

/// Canvas height in rows.
pub const HEIGHT: usize = 25;

/// The space character used to pad cells beyond the source text.
const BLANK: u8 = b' ';

/// The 25x80 grid of instruction/data cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Playfield {
    cells: [[u8; WIDTH]; HEIGHT],
}

impl Default for Playfield {
    fn default() -> Self {
        Self::blank()
    }
}

impl Playfield {
    /// Create an all-space playfield.
    pub fn blank() -> Self {
        Self {
            cells: [[BLANK; WIDTH]; HEIGHT],
        }
    }

    /// Build a playfield from program text.
    ///
    /// Up to 25 lines are taken from the source; each line is truncated or
    /// space-padded to 80 columns, and any missing rows are space-filled.
    /// Lines and columns beyond the canvas are silently dropped.
    pub fn from_source(source: &str) -> Self {
        let mut field = Self::blank();
        for (y, line) in source.lines().take(HEIGHT).enumerate() {
            for (x, byte) in line.bytes().take(WIDTH).enumerate() {
                field.cells[y][x] = byte;
            }
        }
        field
    }

    /// Read the cell at `(x, y)`. Coordinates must be within the canvas.
    #[inline]
    pub fn read(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < WIDTH && y < HEIGHT);
        self.cells[y][x]
    }

    /// Write `code` to the cell at `(x, y)`. Coordinates must be within the
    /// canvas.
    #[inline]
    pub fn write(&mut self, x: usize, y: usize, code: u8) {
        debug_assert!(x < WIDTH && y < HEIGHT);
        self.cells[y][x] = code;
    }

    /// Check whether signed coordinates fall inside the canvas.
    #[inline]
    pub fn contains(x: i64, y: i64) -> bool {
        (0..WIDTH as i64).contains(&x) && (0..HEIGHT as i64).contains(&y)
    }

    /// Render the playfield as text, trimming trailing spaces and empty
    /// trailing rows. Used by the diagnostic listing before execution.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in &self.cells {
            let line: String = row.iter().map(|&c| c as char).collect();
            let trimmed = line.trim_end_matches(' ');
            if !trimmed.is_empty() {
                result.push_str(trimmed);
                result.push('\n');
            }
        }
        result
    }
}

impl fmt::Debug for Playfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Playfield({}x{})", WIDTH, HEIGHT)
    }
}
