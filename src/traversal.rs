//! Depth-first and breadth-first walks over a subtree.
//!
//! The depth-first orders are collected eagerly: building a [`Traversal`]
//! visits the whole subtree up front and the iterator then hands back the
//! recorded references. It can be consumed once and not restarted.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// The order in which a depth-first [`Traversal`] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. For a search tree this is
    /// sorted order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

/// A finite, forward-only sequence of the values in a subtree.
#[derive(Clone, Debug)]
pub struct Traversal<'a, T> {
    values: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Traversal<'a, T> {
    /// Walks the subtree rooted at `root` in the given `order`.
    pub fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        let mut values = Vec::new();
        match order {
            Order::Pre => preorder(root, &mut values),
            Order::In => inorder(root, &mut values),
            Order::Post => postorder(root, &mut values),
        }

        Self {
            values: values.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}
impl<T> FusedIterator for Traversal<'_, T> {}

fn preorder<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(node) = node {
        out.push(&node.value);
        preorder(node.left(), out);
        preorder(node.right(), out);
    }
}

fn inorder<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(node) = node {
        inorder(node.left(), out);
        out.push(&node.value);
        inorder(node.right(), out);
    }
}

fn postorder<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(node) = node {
        postorder(node.left(), out);
        postorder(node.right(), out);
        out.push(&node.value);
    }
}

/// Collects the nodes of a subtree breadth first, left to right within each
/// depth, in the order they leave the queue.
pub(crate) fn level_order<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut visited = Vec::new();
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visited.push(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
    visited
}

/// Tears a subtree down into its values in sorted order.
///
/// Uses an explicit stack since this is typically called on exactly the
/// degenerate trees that would recurse once per node.
pub(crate) fn drain_inorder<T>(link: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    let mut cursor = link;
    loop {
        while let Some(mut node) = cursor {
            cursor = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        values.push(value);
        cursor = right;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    ///     d
    ///    / \
    ///   b   f
    ///  / \ / \
    /// a  c e  g
    fn sample() -> Node<char> {
        Node::new(
            'd',
            Some(Node::new('b', Some(Node::leaf('a')), Some(Node::leaf('c')))),
            Some(Node::new('f', Some(Node::leaf('e')), Some(Node::leaf('g')))),
        )
    }

    fn walk(root: Option<&Node<char>>, order: Order) -> String {
        Traversal::new(root, order).collect()
    }

    #[test]
    fn depth_first_orders() {
        let root = sample();
        assert_eq!(walk(Some(&root), Order::Pre), "dbacfeg");
        assert_eq!(walk(Some(&root), Order::In), "abcdefg");
        assert_eq!(walk(Some(&root), Order::Post), "acbegfd");
    }

    #[test]
    fn empty_subtree_yields_nothing() {
        let mut traversal = Traversal::<char>::new(None, Order::In);
        assert_eq!(traversal.len(), 0);
        assert_eq!(traversal.next(), None);
    }

    #[test]
    fn traversal_is_not_restartable() {
        let root = sample();
        let mut traversal = Traversal::new(Some(&root), Order::In);
        assert_eq!(traversal.len(), 7);
        assert_eq!(traversal.by_ref().count(), 7);
        assert_eq!(traversal.next(), None);
    }

    #[test]
    fn level_order_goes_depth_by_depth() {
        let root = sample();
        let values: String = level_order(Some(&root))
            .into_iter()
            .map(|n| n.value)
            .collect();
        assert_eq!(values, "dbfaceg");
    }

    #[test]
    fn drain_inorder_moves_values_out_sorted() {
        let root = Box::new(sample());
        let values: String = drain_inorder(Some(root)).into_iter().collect();
        assert_eq!(values, "abcdefg");
    }

    #[test]
    fn drain_inorder_handles_skewed_chain() {
        let mut link = None;
        for value in (0..10_000).rev() {
            link = Some(Box::new(Node {
                value,
                left: None,
                right: link,
            }));
        }
        let values = drain_inorder(link);
        assert_eq!(values, (0..10_000).collect::<Vec<_>>());
    }
}
