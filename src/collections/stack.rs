//! A LIFO stack over [`LinkedList`].
//!
//! Pushing prepends and popping deletes the head, so both ends of the
//! operation stay O(1).

use core::fmt;

use crate::collections::LinkedList;

/// A last-in, first-out stack.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Pushes a value onto the top of the stack in O(1).
    pub fn push(&mut self, value: T) {
        self.list.prepend(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.delete_head()
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns the number of values on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list.iter()).finish()
    }
}
