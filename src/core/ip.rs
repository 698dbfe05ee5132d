//! Instruction pointer: canvas position plus direction of travel.
//!
//! Movement is cardinal only and toroidal: stepping past an edge of the
//! canvas reappears at the opposite edge. The wraparound is unconditional
//! and applies after every cycle, including skip and string cycles.
//!
//! The `?` instruction needs a uniform choice among the four directions.
//! That choice is injected through [`DirectionSource`] so tests can
//! substitute a deterministic sequence; the default source draws from
//! `rand`'s thread-local generator.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use super::grid::{HEIGHT, WIDTH};

/// Direction of travel: one of the four cardinal unit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// The unit vector for this direction as `(dx, dy)`.
    ///
    /// Exactly one component is nonzero. `y` grows downward, so south
    /// is `(0, 1)`.
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        match rng.gen_range(0..4u8) {
            0 => Direction::East,
            1 => Direction::West,
            2 => Direction::South,
            _ => Direction::North,
        }
    }
}

/// A source of directions for the `?` instruction.
pub trait DirectionSource {
    /// Produce the next direction.
    fn next_direction(&mut self) -> Direction;
}

/// Uniformly random directions from the thread-local generator.
#[derive(Debug, Default, Clone)]
pub struct RandomDirections;

impl DirectionSource for RandomDirections {
    fn next_direction(&mut self) -> Direction {
        rand::thread_rng().gen()
    }
}

/// A fixed, repeating sequence of directions for deterministic tests.
#[derive(Debug, Clone)]
pub struct ScriptedDirections {
    sequence: Vec<Direction>,
    cursor: usize,
}

impl ScriptedDirections {
    /// Create a source that cycles through `sequence`.
    ///
    /// # Panics
    /// Panics if the sequence is empty.
    pub fn new(sequence: Vec<Direction>) -> Self {
        assert!(!sequence.is_empty(), "scripted sequence must be non-empty");
        Self { sequence, cursor: 0 }
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        let dir = self.sequence[self.cursor];
        self.cursor = (self.cursor + 1) % self.sequence.len();
        dir
    }
}

/// The instruction pointer: position on the canvas plus travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionPointer {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Default for InstructionPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionPointer {
    /// Create a pointer at the origin, travelling east.
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            direction: Direction::East,
        }
    }

    /// Advance one cell in the current direction with toroidal wraparound.
    pub fn step(&mut self) {
        let (dx, dy) = self.direction.delta();
        self.x = (self.x as i64 + dx).rem_euclid(WIDTH as i64) as usize;
        self.y = (self.y as i64 + dy).rem_euclid(HEIGHT as i64) as usize;
    }
}
