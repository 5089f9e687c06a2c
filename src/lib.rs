//! An unbalanced Binary Search Tree (BST) whose nodes keep a pointer to their parent, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree does nothing to keep its height down, so inserting
//! keys in sorted order degrades it into a linked list.
//!
//! ## Parent pointers
//!
//! Every node here also points back at its parent. That lets a handle to any node find its
//! in-order neighbours (see [`NodeRef::predecessor`] and [`NodeRef::successor`]) by walking up
//! the tree, and lets removal splice a node out without remembering the path taken to reach it.
//! Parent pointers never own anything: a node is owned by exactly one parent (or by the
//! [`Tree`] for the root).
//!
//! Handles borrow the tree, so the borrow checker rules out using a handle to a node that has
//! since been removed.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traversal;
pub mod tree;

pub use error::InvariantError;
pub use tree::{Diagram, NodeMut, NodeRef, Tree};

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
