//! The cell a [`Tree`][crate::Tree] is built from.

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value and exclusively owns its (optional) left and right
/// subtrees. There is no parent pointer: every structural change is made by
/// handing a subtree root back to whoever owns the link above it.
///
/// A `Node` does not enforce any ordering itself. Keeping every value in the
/// left subtree `<=` and every value in the right subtree `>` is the job of
/// the [`Tree`][crate::Tree] that owns it.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given `value` and children.
    pub fn new(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Construct a new childless `Node`.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self::leaf(value))
    }
}
