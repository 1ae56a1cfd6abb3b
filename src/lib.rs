//! An ordered, mutable Binary Search Tree (BST) that keeps the height of every
//! node cached alongside its key.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a key and sometimes has
//! child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key. Inserting a key that is already
//!    present adds another node in the right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree never rebalances, so inserting keys
//! in sorted order produces a tree whose height is one less than its size.
//! Sorted iteration visits the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## Height
//!
//! The height of a tree is the number of edges on the longest path from its
//! root down to a leaf: `-1` for an empty tree, `0` for a single key. Every
//! node caches its own height and an insertion recomputes it for each node on
//! the path it took, from the new leaf back up to the root, so reading a
//! height never walks the tree.
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let tree: Tree<_> = [12, 4, 6, 15, 165, 44].into_iter().collect();
//!
//! assert_eq!(tree.min_value(), Some(&4));
//! assert_eq!(tree.max_value(), Some(&165));
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.to_string(), " 4(1) 6(0) 12(3) 15(2) 44(0) 165(1)");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod tree;

pub use error::Error;
pub use tree::{Iter, Node, Tree};
