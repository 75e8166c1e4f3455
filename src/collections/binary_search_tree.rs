//! A binary search tree with ordered insert and lazy traversals.
//!
//! Values greater than or equal to a node descend right, so duplicate
//! values are permitted. Insert and the traversal iterators are all driven
//! by explicit cursors/stacks rather than recursion, keeping deep trees off
//! the call stack.

use core::fmt;

struct BstNode<T> {
    value: T,
    left: Option<Box<BstNode<T>>>,
    right: Option<Box<BstNode<T>>>,
}

/// A binary search tree over `Ord` values.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | O(h) | h = tree height; no rebalancing |
/// | `contains` | O(h) | |
/// | traversals | O(n) total | lazy, O(h) auxiliary stack |
pub struct BinarySearchTree<T> {
    root: Option<Box<BstNode<T>>>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value at its ordered position.
    ///
    /// Values `>=` the current node descend right, so duplicates are kept.
    pub fn insert(&mut self, value: T) {
        let mut cursor = &mut self.root;
        while let Some(ref mut node) = *cursor {
            cursor = if value >= node.value {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        *cursor = Some(Box::new(BstNode {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Returns `true` if `value` is present in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                core::cmp::Ordering::Equal => return true,
                core::cmp::Ordering::Less => node.left.as_deref(),
                core::cmp::Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Returns a lazy in-order (sorted) iterator over the values.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder {
            stack: Vec::new(),
            current: self.root.as_deref(),
        }
    }

    /// Returns a lazy pre-order (visit-then-descend) iterator.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Returns a lazy post-order (descend-then-visit) iterator.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .into_iter()
                .map(|root| (root, false))
                .collect(),
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

/// Lazy in-order iterator over a [`BinarySearchTree`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a BstNode<T>>,
    current: Option<&'a BstNode<T>>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}

/// Lazy pre-order iterator over a [`BinarySearchTree`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a BstNode<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right below left so the left subtree pops first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

/// Lazy post-order iterator over a [`BinarySearchTree`].
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a BstNode<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}
