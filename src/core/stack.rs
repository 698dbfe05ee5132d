//! Operand stack for the Befunge-93 engine.
//!
//! LIFO storage of signed integers. The defining invariant: popping an empty
//! stack yields zero and leaves the stack empty. Underflow is never an error
//! and never visible to the program, so every instruction that pops can run
//! against any stack depth.

use std::fmt;

/// The operand stack: growable, LIFO, never underflows visibly.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OperandStack {
    elements: Vec<i64>,
}

impl OperandStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Push a value onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: i64) {
        self.elements.push(value);
    }

    /// Pop the top value, yielding zero if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> i64 {
        self.elements.pop().unwrap_or(0)
    }

    /// Peek at the top value without removing it, zero if empty.
    #[inline]
    pub fn peek(&self) -> i64 {
        self.elements.last().copied().unwrap_or(0)
    }

    /// Duplicate the top of the stack: pop `a`, push `a`, push `a`.
    ///
    /// On an empty stack this pushes two zeroes, matching the pop-then-push
    /// definition rather than special-casing emptiness.
    pub fn dup(&mut self) {
        let a = self.pop();
        self.push(a);
        self.push(a);
    }

    /// Swap the top two values: pop `a` then `b`, push `a`, push `b`.
    pub fn swap(&mut self) {
        let a = self.pop();
        let b = self.pop();
        self.push(a);
        self.push(b);
    }

    /// Pop and discard the top value.
    pub fn discard(&mut self) {
        self.pop();
    }

    /// Current depth of the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    /// Check if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// View the stack contents, bottom first.
    pub fn as_slice(&self) -> &[i64] {
        &self.elements
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl fmt::Debug for OperandStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack{:?}", self.elements)
    }
}
