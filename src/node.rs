//! The `Node` record and the owning slot that links nodes together.

use std::collections::VecDeque;
use std::fmt;

/// An owning child slot. Either empty or holding exactly one child.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` stores one key and owns up to two children. Nodes have no parent pointer so every
/// algorithm in this crate walks the tree from the root down.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf holding `key`.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Like [`Node::new`] but already boxed, ready to be placed in a [`Link`].
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one. Every key in it is smaller than
    /// [`Node::key`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one. Every key in it is greater than
    /// [`Node::key`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The height of the subtree rooted at this node, counted in edges. A leaf has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build(vec![2, 1, 3, 4]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 2);
    /// assert_eq!(tree.find(&4).unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> usize {
        // A present node is always at least height 0.
        Self::height_of(Some(self)) as usize
    }

    /// The height of a possibly absent subtree. An absent subtree has height `-1` so that a leaf,
    /// being one edge above its absent children, has height `0`.
    ///
    /// This walks the subtree level by level rather than recursing so that it is safe on
    /// arbitrarily skewed trees.
    pub fn height_of(subtree: Option<&Self>) -> isize {
        let mut height = -1;
        let mut level: VecDeque<&Self> = subtree.into_iter().collect();

        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                if let Some(node) = level.pop_front() {
                    level.extend(node.left());
                    level.extend(node.right());
                }
            }
        }

        height
    }
}

// Only the children's keys are shown, so formatting a deep tree doesn't recurse.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand build a node with the given children.
    fn node(key: i32, left: Option<Node<i32>>, right: Option<Node<i32>>) -> Node<i32> {
        Node {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    #[test]
    fn absent_subtree_has_height_negative_one() {
        assert_eq!(Node::<i32>::height_of(None), -1);
    }

    #[test]
    fn leaf_has_height_zero() {
        let leaf = Node::new(1);

        assert!(leaf.is_leaf());
        assert_eq!(leaf.height(), 0);
        assert_eq!(Node::height_of(Some(&leaf)), 0);
    }

    #[test]
    fn height_follows_longest_path() {
        // 5 -> 3 -> 4 -> (nothing), 5 -> 7
        let tree = node(
            5,
            Some(node(3, None, Some(node(4, None, None)))),
            Some(node(7, None, None)),
        );

        assert_eq!(tree.height(), 2);
        assert_eq!(tree.left().map(Node::height), Some(1));
        assert_eq!(tree.right().map(Node::height), Some(0));
    }

    #[test]
    fn accessors_expose_shape() {
        let tree = node(2, Some(node(1, None, None)), None);

        assert_eq!(tree.key(), &2);
        assert_eq!(tree.left().map(Node::key), Some(&1));
        assert!(tree.right().is_none());
        assert!(!tree.is_leaf());
    }

    #[test]
    fn debug_shows_child_keys() {
        let tree = node(2, Some(node(1, None, None)), None);

        assert_eq!(
            format!("{:?}", tree),
            "Node { key: 2, left: Some(1), right: None }"
        );
    }
}
