//! Export a subtree as a Graphviz DOT digraph.
//!
//! This is a debugging aid, not an interchange format: there is no parser for
//! the output. Nodes are labelled by their values' [`Display`][fmt::Display]
//! output. Missing children are drawn as anonymous point-shaped nodes named
//! `node0`, `node1`, ... in the order they are discovered, so the graph keeps
//! left and right children visually distinct.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{dot, Tree};
//!
//! let tree: Tree<_> = [2, 1].into_iter().collect();
//!
//! assert_eq!(
//!     dot::to_dot_format(tree.root()),
//!     "digraph G { \n\
//!      graph [ordering=\"out\"]; \n\
//!      2 -> 1;\n\
//!      node0 [shape=point];\n\
//!      2 -> node0;\n\
//!      node1 [shape=point];\n\
//!      1 -> node1;\n\
//!      node2 [shape=point];\n\
//!      1 -> node2;\n\
//!      };"
//! );
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::node::Node;

/// Renders the subtree rooted at `root` as a DOT digraph.
pub fn to_dot_format<T: fmt::Display>(root: Option<&Node<T>>) -> String {
    Dot::new(root).to_string()
}

/// [`Display`][fmt::Display] adapter producing the DOT text for a subtree.
pub struct Dot<'a, T>(Option<&'a Node<T>>);

impl<'a, T> Dot<'a, T> {
    /// Wraps the subtree rooted at `root`.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self(root)
    }
}

impl<T: fmt::Display> fmt::Display for Dot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{ ")?;
        writeln!(f, "graph [ordering=\"out\"]; ")?;

        let mut sentinels = 0usize;
        let mut queue: VecDeque<&Node<T>> = self.0.into_iter().collect();
        while let Some(cursor) = queue.pop_front() {
            for child in [cursor.left(), cursor.right()] {
                match child {
                    Some(child) => {
                        writeln!(f, "{} -> {};", cursor.value(), child.value())?;
                        queue.push_back(child);
                    }
                    None => {
                        writeln!(f, "node{} [shape=point];", sentinels)?;
                        writeln!(f, "{} -> node{};", cursor.value(), sentinels)?;
                        sentinels += 1;
                    }
                }
            }
        }

        write!(f, "}};")
    }
}
