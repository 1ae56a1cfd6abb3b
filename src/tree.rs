//! A mutable BST whose nodes cache their own height. Nothing rebalances the tree so its shape
//! (and therefore its height) depends entirely on insertion order.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.height(), -1);
//! assert_eq!(tree.find(&12), None);
//!
//! tree.insert(12);
//! tree.insert(4);
//! tree.insert(15);
//! assert_eq!(tree.find(&4), Some(&4));
//! assert_eq!(tree.height(), 1);
//!
//! // Keys come back sorted, each paired with the height cached at its node.
//! let listing: Vec<_> = tree.iter().collect();
//! assert_eq!(listing, [(&4, 0), (&12, 1), (&15, 0)]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::Error;

/// The height of an empty tree. A missing child contributes this to its parent's height.
const EMPTY_HEIGHT: isize = -1;

/// An ordered Binary Search Tree. Keys in a node's left subtree are strictly less than the node's
/// key and keys in its right subtree are greater than or equal to it, so duplicates are kept
/// rather than overwritten.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Degenerate trees can be as deep as they are long so tear down with a stack instead of
    // letting each `Box` drop its children recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root().map(Node::clone_boxed),
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

/// Renders the in-order listing as ` key(height)` for every node.
///
/// # Examples
///
/// ```
/// use ordered_tree::Tree;
///
/// let tree: Tree<_> = [12, 4, 6].into_iter().collect();
/// assert_eq!(tree.to_string(), " 4(1) 6(0) 12(2)");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, height) in self {
            write!(f, " {}({})", key, height)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a `Tree` holding a single key. Its height is 0.
    pub fn leaf(key: T) -> Self {
        Self {
            root: Some(Node::new_boxed(key)),
        }
    }

    /// Whether the tree holds no key at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gives an empty tree its first key.
    ///
    /// A tree that already holds a key is left untouched: replacing the root's key could put it
    /// out of order with the existing children.
    ///
    /// # Errors
    ///
    /// [`Error::Occupied`] if the tree is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.set_initial_key(12), Ok(()));
    /// assert_eq!(tree.height(), 0);
    ///
    /// assert_eq!(tree.set_initial_key(4), Err(Error::Occupied));
    /// assert_eq!(tree.find(&12), Some(&12));
    /// ```
    pub fn set_initial_key(&mut self, key: T) -> Result<(), Error> {
        if self.root.is_some() {
            return Err(Error::Occupied);
        }
        self.root = Some(Node::new_boxed(key));
        Ok(())
    }

    /// Inserts the key into the tree. Equal keys are routed to the right subtree so inserting a
    /// key that is already present adds another node for it.
    ///
    /// Every node on the path from the new leaf back up to the root has its height recomputed
    /// before this returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.height(), 1);
    /// assert_eq!(tree.iter().count(), 2);
    /// ```
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        // Detach every node on the way down, then reattach them bottom-up fixing heights.
        let mut path = Vec::new();
        let mut slot = self.root.take();
        while let Some(mut node) = slot {
            let side = key.cmp(&node.key);
            slot = match side {
                Ordering::Less => node.left.take(),
                Ordering::Equal | Ordering::Greater => node.right.take(),
            };
            path.push((node, side));
        }

        let mut subtree = Node::new_boxed(key);
        while let Some((mut node, side)) = path.pop() {
            node.reattach(side, subtree);
            subtree = node;
        }
        self.root = Some(subtree);
    }

    /// Potentially finds the stored key equal to the given one. If no node has an equal key,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root().and_then(|n| n.find(key))
    }

    /// The smallest key in the tree, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min_value(), None);
    ///
    /// tree.extend([12, 4, 15]);
    /// assert_eq!(tree.min_value(), Some(&4));
    /// ```
    pub fn min_value(&self) -> Option<&T> {
        self.root().map(Node::min_value)
    }

    /// The largest key in the tree, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max_value(), None);
    ///
    /// tree.extend([12, 4, 15]);
    /// assert_eq!(tree.max_value(), Some(&15));
    /// ```
    pub fn max_value(&self) -> Option<&T> {
        self.root().map(Node::max_value)
    }

    /// Gets the height of this tree: -1 when empty, 0 for a single key, otherwise the number of
    /// edges on the longest path from the root down to a leaf. This reads a cached value.
    pub fn height(&self) -> isize {
        self.root().map_or(EMPTY_HEIGHT, |n| n.height)
    }

    /// Visits every key in ascending order together with the height cached at its node.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// The root node, if there is one. Every [`Node`] can be inspected as the root of its own
    /// subtree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = (&'a T, isize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` holds a key and owns up to two children. It is the root of its own subtree and
/// supports every read-only query a [`Tree`] does.
pub struct Node<T> {
    key: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// Edges on the longest path from this node down to a leaf. A node with no children has a
    /// height of 0.
    height: isize,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(key: T) -> Box<Self> {
        Box::new(Node {
            height: 0,
            key,
            left: None,
            right: None,
        })
    }

    fn clone_boxed(&self) -> Box<Self>
    where
        T: Clone,
    {
        // Post-order with a work stack, like `Tree::drop`. A node is rebuilt once both of its
        // subtrees sit on top of `done`, right above left.
        let mut pending = vec![(self, false)];
        let mut done: Vec<Box<Self>> = Vec::new();
        while let Some((node, children_done)) = pending.pop() {
            if !children_done {
                pending.push((node, true));
                pending.extend(node.right().map(|n| (n, false)));
                pending.extend(node.left().map(|n| (n, false)));
                continue;
            }
            let right = node.right.as_ref().and_then(|_| done.pop());
            let left = node.left.as_ref().and_then(|_| done.pop());
            done.push(Box::new(Node {
                height: node.height,
                key: node.key.clone(),
                left,
                right,
            }));
        }
        done.pop().expect("Cloning a subtree yields its root")
    }

    /// The key stored at this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// The height cached at this node.
    pub fn height(&self) -> isize {
        self.height
    }

    /// The subtree of keys strictly less than this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The subtree of keys greater than or equal to this node's key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Finds the key equal to the given one in this subtree. An equal key at a shallower node is
    /// returned before any duplicates below it.
    pub fn find(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            let next = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => node.right(),
            };
            node = next?;
        }
    }

    /// The leftmost key of this subtree.
    pub fn min_value(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    /// The rightmost key of this subtree.
    pub fn max_value(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }

    /// Visits this subtree in order. See [`Tree::iter`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(Some(self))
    }

    /// Hangs `child` back on the side it was detached from and recomputes this node's height.
    fn reattach(&mut self, side: Ordering, child: Box<Self>)
    where
        T: Ord,
    {
        match side {
            Ordering::Less => self.left = Some(child),
            Ordering::Equal | Ordering::Greater => self.right = Some(child),
        }
        self.fix_height();

        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(left.key < self.key);
            }
            if let Some(right) = self.right() {
                assert!(right.key >= self.key);
            }
        }
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1. The children's
    /// heights must already be correct.
    fn fix_height(&mut self) {
        let left_height = self.left().map_or(EMPTY_HEIGHT, |n| n.height);
        let right_height = self.right().map_or(EMPTY_HEIGHT, |n| n.height);
        self.height = left_height.max(right_height) + 1;
    }
}

/// An in-order iterator over a tree's keys and their cached heights. Nodes are visited lazily;
/// the iterator only holds the path of ancestors still waiting to be yielded.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, isize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((&node.key, node.height))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
