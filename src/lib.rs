//! This crate exposes a Binary Search Tree (BST) that is built balanced from any collection of
//! keys and rebalanced only on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will store a key
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. A tree built with [`Tree::build`] has the smallest
//! possible height, `O(lg N)`, but this tree does not rotate nodes on `insert` or `delete` the
//! way an AVL tree would. Inserting keys in ascending order will degrade it to a linked list.
//! [`Tree::is_balanced`] detects that and [`Tree::rebalance`] rebuilds the tree at minimum height.
//!
//! Because the height is unbounded between rebalances, no operation here recurses once per level
//! of the tree.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::{Order, Tree};
//!
//! let mut tree = Tree::build(vec![5, 1, 3, 3, 4, 2]);
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.level_order(), [&3, &1, &4, &2, &5]);
//!
//! tree.insert(6);
//! tree.insert(7);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.traverse(Order::InOrder).count(), 7);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod node;
pub mod pretty;
pub mod traverse;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use node::Node;
pub use traverse::Order;
pub use tree::Tree;
