//! An unbalanced Binary Search Tree with on-demand rebalancing.
//!
//! Nodes own their children outright and there are no parent pointers.
//! Insertion and deletion are written as recursive functions that take a
//! subtree by value and return its (possibly new) root, which the caller then
//! re-links. Nothing is rebalanced automatically; [`Tree::balance`] rebuilds
//! the whole tree into minimum height when asked.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//! assert_eq!(tree.height(), -1);
//!
//! // Adding in ascending order makes a chain leaning right.
//! for x in 1..=7 {
//!     tree.add(x);
//! }
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding keeps the values and flattens the shape.
//! tree.balance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! assert!(tree.inorder_iter().copied().eq(1..=7));
//!
//! // Removing reports whether anything was there.
//! assert!(tree.remove(&4));
//! assert!(!tree.remove(&4));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::traversal::{self, Order, Traversal};

/// A Binary Search Tree. Values equal to a node's value are placed in its
/// left subtree so duplicates are kept, and an in-order walk yields them in
/// the order they were added.
///
/// Neither the size nor the height is cached: both are recomputed with a full
/// walk on every call.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Release nodes from an explicit stack instead of letting each `Box`
        // drop its children recursively.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree. This walks every node.
    pub fn size(&self) -> usize {
        subtree_size(self.root())
    }

    /// The number of edges on the longest path from the root down to a leaf.
    /// A single node has height `0` and the empty tree has height `-1`.
    pub fn height(&self) -> i32 {
        subtree_height(self.root())
    }

    /// Read-only access to the root node, for walking or exporting the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The smallest value in the tree, found by following left links.
    pub fn minimum(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree, found by following right links.
    pub fn maximum(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Values in pre-order: node, left subtree, right subtree.
    pub fn preorder_iter(&self) -> Traversal<'_, T> {
        Traversal::new(self.root(), Order::Pre)
    }

    /// Values in in-order (sorted order): left subtree, node, right subtree.
    pub fn inorder_iter(&self) -> Traversal<'_, T> {
        Traversal::new(self.root(), Order::In)
    }

    /// Values in post-order: left subtree, right subtree, node.
    pub fn postorder_iter(&self) -> Traversal<'_, T> {
        Traversal::new(self.root(), Order::Post)
    }

    /// Whether the tree is as short as a tree of its size can be, i.e.
    /// `2^height <= size < 2^(height + 1)`. The empty tree is balanced.
    ///
    /// This recomputes both the height and the size.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let bushy: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let chain: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(bushy.is_balanced());
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        // Only the empty tree has a negative height.
        let Ok(height) = u32::try_from(self.height()) else {
            return true;
        };
        let size = self.size();

        let lower = 1usize.checked_shl(height).map_or(false, |min| min <= size);
        let upper = 1usize
            .checked_shl(height + 1)
            .map_or(true, |bound| size < bound);
        lower && upper
    }

    /// Weak equality: both trees have the same number of nodes and their
    /// values agree pairwise when each tree is walked breadth first.
    ///
    /// Shape is not compared directly, so two differently shaped trees whose
    /// breadth-first walks happen to line up compare equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let a: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let b: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let c: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(a.equals(&b));
    /// assert!(!a.equals(&c));
    /// ```
    pub fn equals(&self, other: &Tree<T>) -> bool
    where
        T: PartialEq,
    {
        let mine = traversal::level_order(self.root());
        let theirs = traversal::level_order(other.root());

        mine.len() == theirs.len()
            && mine
                .iter()
                .zip(&theirs)
                .all(|(a, b)| a.value() == b.value())
    }

    /// Whether both trees hold the same values in the same sorted order,
    /// regardless of shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let a: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let b: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(a.same_values(&b));
    /// assert!(!a.equals(&b));
    /// ```
    pub fn same_values(&self, other: &Tree<T>) -> bool
    where
        T: PartialEq,
    {
        self.inorder_iter().eq(other.inorder_iter())
    }

    /// [`Tree::equals`] for a comparand that may be missing.
    pub fn try_equals(&self, other: Option<&Tree<T>>) -> Result<bool>
    where
        T: PartialEq,
    {
        let other = other.ok_or_else(|| Error::missing("equals"))?;
        Ok(self.equals(other))
    }

    /// [`Tree::same_values`] for a comparand that may be missing.
    pub fn try_same_values(&self, other: Option<&Tree<T>>) -> Result<bool>
    where
        T: PartialEq,
    {
        let other = other.ok_or_else(|| Error::missing("same_values"))?;
        Ok(self.same_values(other))
    }
}

impl<T: Ord> Tree<T> {
    /// Finds the stored value equal to `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut cursor = self.root();
        while let Some(node) = cursor {
            cursor = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.value()),
            };
        }
        None
    }

    /// Whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Adds `value` as a new leaf. A value equal to one already present goes
    /// to that node's left, so duplicates are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.root().and_then(|n| n.left()).map(|n| *n.value()), Some(1));
    /// ```
    pub fn add(&mut self, value: T) {
        log::trace!("Tree::add");
        self.root = Some(add_to_subtree(self.root.take(), value));
    }

    /// Removes one value equal to `value` and returns `true`, or returns
    /// `false` and leaves the tree untouched if there is no such value.
    ///
    /// A node with two children takes its in-order predecessor's value and
    /// the predecessor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(1));
    /// assert!(!tree.remove(&2));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        if !self.contains(value) {
            log::debug!("Tree::remove: value not present");
            return false;
        }
        self.root = remove_from_subtree(self.root.take(), value);
        log::trace!("Tree::remove: value removed");
        true
    }

    /// Rebuilds the tree into minimum height if it isn't already
    /// [balanced][Tree::is_balanced]. The sorted sequence of values is kept
    /// exactly; each subtree root is the lower middle of its range.
    pub fn balance(&mut self) {
        if self.is_balanced() {
            return;
        }

        let values = traversal::drain_inorder(self.root.take());
        log::debug!("Tree::balance: rebuilding {} values", values.len());
        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        self.root = build_balanced(&mut slots);
    }

    /// [`Tree::get`] for a value that may be missing.
    pub fn try_get(&self, value: Option<&T>) -> Result<Option<&T>> {
        let value = value.ok_or_else(|| Error::missing("get"))?;
        Ok(self.get(value))
    }

    /// [`Tree::contains`] for a value that may be missing.
    pub fn try_contains(&self, value: Option<&T>) -> Result<bool> {
        let value = value.ok_or_else(|| Error::missing("contains"))?;
        Ok(self.contains(value))
    }

    /// [`Tree::add`] for a value that may be missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_add(Some(1)), Ok(()));
    /// assert_eq!(
    ///     tree.try_add(None),
    ///     Err(Error::InvalidArgument { operation: "add" })
    /// );
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn try_add(&mut self, value: Option<T>) -> Result<()> {
        let value = value.ok_or_else(|| Error::missing("add"))?;
        self.add(value);
        Ok(())
    }

    /// [`Tree::remove`] for a value that may be missing.
    pub fn try_remove(&mut self, value: Option<&T>) -> Result<bool> {
        let value = value.ok_or_else(|| Error::missing("remove"))?;
        Ok(self.remove(value))
    }
}

fn subtree_size<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| 1 + subtree_size(n.left()) + subtree_size(n.right()))
}

fn subtree_height<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(-1, |n| {
        1 + subtree_height(n.left()).max(subtree_height(n.right()))
    })
}

/// Returns the subtree rooted at `link` with `value` added as a new leaf.
fn add_to_subtree<T: Ord>(link: Link<T>, value: T) -> Box<Node<T>> {
    match link {
        None => Node::boxed(value),
        Some(mut node) => {
            if value <= node.value {
                node.left = Some(add_to_subtree(node.left.take(), value));
            } else {
                node.right = Some(add_to_subtree(node.right.take(), value));
            }
            node
        }
    }
}

/// Returns the subtree rooted at `link` without one node equal to `value`.
/// Callers check that the value is present first.
fn remove_from_subtree<T: Ord>(link: Link<T>, value: &T) -> Link<T> {
    let mut node = link?;
    match value.cmp(&node.value) {
        Ordering::Less => {
            node.left = remove_from_subtree(node.left.take(), value);
            Some(node)
        }
        Ordering::Greater => {
            node.right = remove_from_subtree(node.right.take(), value);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            // Two children: pull up the predecessor, i.e. the largest value in
            // the left subtree. It has no right child so unlinking it is easy.
            (Some(left), right) => {
                let (predecessor, rest) = take_rightmost(left);
                node.value = predecessor;
                node.left = rest;
                node.right = right;
                Some(node)
            }
        },
    }
}

/// Returns the largest value in the subtree and the subtree without it.
fn take_rightmost<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.right.take() {
        None => {
            let Node { value, left, .. } = *node;
            (value, left)
        }
        Some(right) => {
            let (value, rest) = take_rightmost(right);
            node.right = rest;
            (value, Some(node))
        }
    }
}

/// Builds a minimum height subtree out of sorted values.
fn build_balanced<T>(slots: &mut [Option<T>]) -> Link<T> {
    if slots.is_empty() {
        return None;
    }
    // Lower middle when the length is even.
    let middle = (slots.len() - 1) / 2;
    let (left, rest) = slots.split_at_mut(middle);
    let (value, right) = rest.split_first_mut()?;

    Some(Box::new(Node {
        value: value.take()?,
        left: build_balanced(left),
        right: build_balanced(right),
    }))
}
