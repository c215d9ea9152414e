//! Traversals over a tree. Each order is its own iterator type so callers can walk the tree
//! lazily, and every one of them keeps its pending work in an explicit stack or queue. That
//! matters because this tree never balances itself: a run of ascending inserts produces a spine
//! as tall as the tree is large.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::{Order, Tree};
//!
//! let tree = Tree::build(1..=7);
//! let keys = |order| tree.traverse(order).map(|n| *n.key()).collect::<Vec<_>>();
//!
//! assert_eq!(keys(Order::LevelOrder), [4, 2, 6, 1, 3, 5, 7]);
//! assert_eq!(keys(Order::PreOrder), [4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(keys(Order::InOrder), [1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(keys(Order::PostOrder), [1, 3, 2, 5, 7, 6, 4]);
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first, root first, each level left to right.
    LevelOrder,
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields keys in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl Order {
    /// All orders, in the order they're usually listed.
    pub const ALL: [Order; 4] = [
        Order::LevelOrder,
        Order::PreOrder,
        Order::InOrder,
        Order::PostOrder,
    ];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::LevelOrder => "level-order",
            Order::PreOrder => "pre-order",
            Order::InOrder => "in-order",
            Order::PostOrder => "post-order",
        };
        f.write_str(name)
    }
}

/// Breadth-first traversal backed by a FIFO queue.
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

/// Pre-order traversal. The right child is pushed before the left so the left is popped first.
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// In-order traversal. The stack holds the chain of ancestors whose left subtrees are still
/// being visited.
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Post-order traversal. Each node is pushed twice: once to expand its children and once,
/// beneath them, to be yielded after they're done.
pub struct PostOrder<'a, K> {
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

/// A traversal in any [`Order`], chosen at runtime. Returned by
/// [`Tree::traverse`][crate::Tree::traverse].
pub enum Traversal<'a, K> {
    /// See [`LevelOrder`].
    LevelOrder(LevelOrder<'a, K>),
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, K>),
    /// See [`InOrder`].
    InOrder(InOrder<'a, K>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, K>),
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        match order {
            Order::LevelOrder => Self::LevelOrder(LevelOrder::new(root)),
            Order::PreOrder => Self::PreOrder(PreOrder::new(root)),
            Order::InOrder => Self::InOrder(InOrder::new(root)),
            Order::PostOrder => Self::PostOrder(PostOrder::new(root)),
        }
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::LevelOrder(t) => t.next(),
            Self::PreOrder(t) => t.next(),
            Self::InOrder(t) => t.next(),
            Self::PostOrder(t) => t.next(),
        }
    }
}

/// Ascending iterator over the keys of a tree. Returned by [`Tree::iter`][crate::Tree::iter].
pub struct Keys<'a, K> {
    inner: InOrder<'a, K>,
}

impl<'a, K> Keys<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            inner: InOrder::new(root),
        }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Node::key)
    }
}
