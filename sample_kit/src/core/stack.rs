//! Unbounded LIFO stack with strict underflow failure.

use thiserror::Error;

/// Returned by [`Stack::pop`] when there is nothing left to pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Can't call Pop on an empty stack.")]
pub struct EmptyStackError;

/// Last-in-first-out container.
///
/// Push and pop only touch the top. Capacity grows with memory; there is no
/// upper bound and no implicit clearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements currently held.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Place `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the most recently pushed element.
    ///
    /// Fails with [`EmptyStackError`] instead of underflowing.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.items.pop().ok_or(EmptyStackError)
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Pushes in iteration order, so the last yielded value ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
