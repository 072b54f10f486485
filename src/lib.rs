//! This crate exposes a plain Binary Search Tree (BST) that is only
//! rebalanced when asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less
//!    than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Equal values therefore pile up to the left and an in-order walk (left
//! subtree, then the node, then the right subtree) visits values in sorted
//! order. A rebalance may leave a run of equal values split across both
//! sides of one of them; lookups and later insertions still work since every
//! value on the left stays `<=` and every value on the right stays `>=`.
//!
//! Searching takes `O(height)`. Without any balancing a tree built from sorted
//! input degenerates into a chain of height `N - 1`. [`Tree::balance`] rebuilds
//! such a tree into the minimum height of `floor(lg N)` by laying the sorted
//! values out again, always picking the middle of each range as the root.
//!
//! The [`script`] module and the `bst` binary drive a tree from text commands,
//! and [`dot`] renders one for Graphviz.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod dot;
mod error;
mod node;
pub mod script;
pub mod traversal;
mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
