//! Helpers shared by the unit tests.


use crate::node::{Link, Node};
use crate::Tree;

/// Builds a tree whose keys `0..len` all hang off each other's right child. Going through
/// [`Tree::insert`] would take quadratic time to get the same shape.
pub(crate) fn right_spine(len: usize) -> Tree<i32> {
    let mut root: Link<i32> = None;
    for key in (0..len as i32).rev() {
        let mut node = Node::new_boxed(key);
        node.right = root;
        root = Some(node);
    }
    Tree { root, len }
}

/// Asserts that every node's key sits strictly between the bounds inherited from its ancestors
/// and that the cached length matches the number of reachable nodes.
pub(crate) fn assert_invariants<K: Ord + std::fmt::Debug>(tree: &Tree<K>) {
    let mut stack: Vec<(&Node<K>, Option<&K>, Option<&K>)> =
        tree.root().map(|n| (n, None, None)).into_iter().collect();
    let mut count = 0;

    while let Some((node, low, high)) = stack.pop() {
        count += 1;
        if let Some(low) = low {
            assert!(node.key() > low, "{:?} is not above {:?}", node.key(), low);
        }
        if let Some(high) = high {
            assert!(node.key() < high, "{:?} is not below {:?}", node.key(), high);
        }
        stack.extend(node.left().map(|l| (l, low, Some(node.key()))));
        stack.extend(node.right().map(|r| (r, Some(node.key()), high)));
    }

    assert_eq!(count, tree.len());
}
