//! Sequence and tree collections.
//!
//! These are the simple collaborators the graph traversals build on:
//! - [`LinkedList`]: singly linked list with O(1) append and prepend
//! - [`Stack`]: LIFO adapter over the list
//! - [`Queue`]: FIFO adapter over the list (the BFS frontier)
//! - [`BinarySearchTree`]: ordered insert with lazy traversals

pub mod binary_search_tree;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use binary_search_tree::BinarySearchTree;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
