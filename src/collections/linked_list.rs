//! A singly linked list tracking both head and tail.
//!
//! Tracking the tail keeps `append` O(1); every mutating operation keeps the
//! tail pointer in sync with the `Box` chain owned by `head`.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `append` | O(1) |
//! | `prepend` | O(1) |
//! | `delete_head` | O(1) |
//! | `delete` | O(n) |
//! | `find` | O(n) |

use core::fmt;
use core::ptr;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list with O(1) append and prepend.
///
/// The node chain is owned through `head`; `tail` is a raw-pointer cache of
/// the last node, never a second owner.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    /// Last node of the chain, or null when the list is empty.
    tail: *mut Node<T>,
    len: usize,
}

// SAFETY: the list exclusively owns its nodes through `head`; `tail` points
// into that owned chain and is never shared outside `&mut self` mutation.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: shared access only reads through `head`/`tail`; no interior
// mutability is involved.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value to the end of the list in O(1).
    pub fn append(&mut self, value: T) {
        let mut node = Box::new(Node { value, next: None });
        let raw: *mut Node<T> = &mut *node;

        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY: a non-null `tail` points at the last node of the chain
            // owned by `head`, and no other reference to it is live while we
            // hold `&mut self`.
            unsafe { (*self.tail).next = Some(node) };
        }

        self.tail = raw;
        self.len += 1;
    }

    /// Prepends a value to the front of the list in O(1).
    pub fn prepend(&mut self, value: T) {
        let mut node = Box::new(Node {
            value,
            next: self.head.take(),
        });

        if self.tail.is_null() {
            self.tail = &mut *node;
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the first value and returns it, or `None` if the list is
    /// empty.
    pub fn delete_head(&mut self) -> Option<T> {
        let node = *self.head.take()?;
        self.head = node.next;

        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }

        self.len -= 1;
        Some(node.value)
    }

    /// Returns a reference to the first value.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a reference to the last value.
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_null() {
            return None;
        }
        // SAFETY: a non-null `tail` points at the last node of the chain
        // owned by `head`; `&self` guarantees no mutation is in flight.
        unsafe { Some(&(*self.tail).value) }
    }

    /// Returns an iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns a reference to the first value equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|candidate| *candidate == value)
    }

    /// Returns `true` if some value in the list equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first value equal to `value` and returns it.
    ///
    /// Returns `None` and leaves the list untouched when no value matches.
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let mut prev: *mut Node<T> = ptr::null_mut();
        let mut cur: *mut Node<T> = match self.head.as_deref_mut() {
            Some(node) => node,
            None => return None,
        };

        // SAFETY: `prev` and `cur` always point into the chain owned by
        // `self.head`; `&mut self` guarantees exclusive access, and nodes
        // are unlinked before their box is moved out.
        unsafe {
            loop {
                if (*cur).value == *value {
                    let mut removed = if prev.is_null() {
                        self.head.take()?
                    } else {
                        (*prev).next.take()?
                    };

                    let rest = removed.next.take();
                    if prev.is_null() {
                        self.head = rest;
                    } else {
                        (*prev).next = rest;
                    }

                    if ptr::eq(self.tail, &*removed) {
                        self.tail = prev;
                    }

                    self.len -= 1;
                    return Some(removed.value);
                }

                match (*cur).next.as_deref_mut() {
                    Some(next) => {
                        prev = cur;
                        cur = next;
                    }
                    None => return None,
                }
            }
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop of a long `Box`
        // chain can exhaust the call stack.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = ptr::null_mut();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Borrowing iterator over a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

/// Owning iterator over a [`LinkedList`], front to back.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.delete_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
