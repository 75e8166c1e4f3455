//! A FIFO queue over [`LinkedList`].
//!
//! A queue is a list that limits where values enter and leave: enqueue
//! appends to the tail, dequeue deletes the head. This is the frontier
//! collaborator the breadth-first graph traversal builds on.

use core::fmt;

use crate::collections::LinkedList;

/// A first-in, first-out queue.
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds a value to the back of the queue in O(1).
    pub fn enqueue(&mut self, value: T) {
        self.list.append(value);
    }

    /// Removes and returns the front value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.delete_head()
    }

    /// Returns the front value without dequeueing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns the number of values in the queue.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(3);
        queue.enqueue(4);

        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn peek_leaves_front_in_place() {
        let mut queue = Queue::new();
        queue.enqueue(10);

        assert_eq!(queue.peek(), Some(&10));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Some(10));
        assert!(queue.is_empty());
    }
}
