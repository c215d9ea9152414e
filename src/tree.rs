//! A Binary Search Tree that balances only when asked to. Building a tree from a collection
//! always produces a tree of minimum height, but `insert` and `delete` never move existing nodes
//! around, so a run of ascending inserts will happily grow a spine. [`Tree::is_balanced`] reports
//! when that has happened and [`Tree::rebalance`] rebuilds the whole tree from scratch.
//!
//! Keys are unique. Inserting a key that's already present does nothing and deleting a key that
//! isn't present does nothing.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let mut tree = Tree::build(vec![50, 30, 70, 20, 40, 60, 80]);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.depth(&20), Some(2));
//!
//! // Inserting ascending keys piles them up on the right.
//! for key in [150, 160, 170, 180] {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding restores the balance without changing the contents.
//! let before = tree.in_order().into_iter().copied().collect::<Vec<_>>();
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order().into_iter().copied().collect::<Vec<_>>(), before);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, log_enabled, trace, Level};

use crate::error::TreeError;
use crate::node::{Link, Node};
use crate::pretty::Pretty;
use crate::traverse::{Keys, Order, Traversal};

/// A Binary Search Tree over unique keys. See the [module documentation][self] for an overview.
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    /// Number of nodes reachable from `root`.
    pub(crate) len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The default drop would recurse once per level which overflows on a long spine.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("level_order", &self.level_order())
            .finish()
    }
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pretty(), f)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::build(keys)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree of minimum height holding every distinct key in `keys`. The input may be in
    /// any order and may contain duplicates, which are collapsed.
    ///
    /// The sorted keys are split at the middle (the lower middle for an even count), which becomes
    /// the root, and each half is built the same way. Building the same set of keys always gives
    /// the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
    ///
    /// assert_eq!(tree.len(), 11);
    /// assert_eq!(
    ///     tree.in_order(),
    ///     [&1, &3, &4, &5, &7, &8, &9, &23, &67, &324, &6345]
    /// );
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        let received = keys.len();
        keys.sort_unstable();
        keys.dedup();
        debug!(
            "building tree from {} keys ({} distinct)",
            received,
            keys.len()
        );

        Self::from_sorted(keys)
    }

    /// Builds a tree from keys that are already sorted and distinct.
    fn from_sorted(keys: Vec<K>) -> Self {
        let len = keys.len();
        let root = build_balanced(&mut keys.into_iter(), len);
        Self { root, len }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.key()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Inserts `key` as a new leaf and returns its node. Inserting a key that is already present
    /// leaves the tree untouched and returns the existing node.
    ///
    /// The tree is never rebalanced here; see [`Tree::rebalance`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1).key(), &1);
    /// assert_eq!(tree.insert(1).key(), &1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> &Node<K>
    where
        K: Ord,
    {
        let slot = slot_for(&mut self.root, &key);
        if slot.is_none() {
            self.len += 1;
        } else {
            trace!("insert ignored a key that is already present");
        }

        slot.get_or_insert_with(|| Node::new_boxed(key))
    }

    /// Deletes `key` from the tree, returning whether it was there.
    ///
    /// A node with two children isn't unlinked. Instead its in-order successor (the smallest key
    /// in its right subtree) is removed and that key moves into the node, so the node itself
    /// survives with a new key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![10, 5, 15, 3, 7, 12, 18]);
    ///
    /// assert!(tree.delete(&3));
    /// assert!(tree.find(&3).is_none());
    ///
    /// // Deleting it again is a no-op.
    /// assert!(!tree.delete(&3));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let slot = slot_for(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            trace!("delete found nothing to remove");
            return false;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = detach_min(&mut right) {
                    node.key = successor;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
        self.len -= 1;

        true
    }

    /// The height, in edges, of the subtree rooted at the node holding `key`. `None` if the key
    /// isn't in the tree. Use [`Node::height`] when you already have the node.
    pub fn height(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        self.find(key).map(Node::height)
    }

    /// The height of the whole tree: `0` for a single node and `-1` for an empty tree.
    pub fn root_height(&self) -> isize {
        Node::height_of(self.root())
    }

    /// The number of edges between the root and the node holding `key`. The root has depth `0`.
    /// `None` if the key isn't in the tree.
    pub fn depth(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// Like [`Tree::depth`] for a node handle. The node is located by its key.
    pub fn depth_of(&self, node: &Node<K>) -> Option<usize>
    where
        K: Ord,
    {
        self.depth(node.key())
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one. An empty
    /// tree is balanced.
    ///
    /// Heights are computed bottom-up in a single post-order pass. The pass keeps going after
    /// the first offending node but the answer can't change by then.
    pub fn is_balanced(&self) -> bool {
        enum Step<'a, K> {
            /// Compute the height of this subtree.
            Enter(Option<&'a Node<K>>),
            /// Both child heights are on top of `heights`, right above left.
            Exit,
        }

        let mut steps = vec![Step::Enter(self.root())];
        let mut heights: Vec<isize> = Vec::new();
        let mut balanced = true;

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(None) => heights.push(-1),
                Step::Enter(Some(node)) => {
                    steps.push(Step::Exit);
                    steps.push(Step::Enter(node.right()));
                    steps.push(Step::Enter(node.left()));
                }
                Step::Exit => {
                    let right = heights.pop().unwrap_or(-1);
                    let left = heights.pop().unwrap_or(-1);
                    if (left - right).abs() > 1 {
                        balanced = false;
                    }
                    heights.push(1 + left.max(right));
                }
            }
        }

        trace!("is_balanced -> {}", balanced);
        balanced
    }

    /// Throws away the current shape and rebuilds a tree of minimum height from the same keys,
    /// exactly as [`Tree::build`] would. Afterwards [`Tree::is_balanced`] is `true`.
    pub fn rebalance(&mut self) {
        let before = if log_enabled!(Level::Debug) {
            Some(self.root_height())
        } else {
            None
        };

        let keys = drain_in_order(self.root.take(), self.len);
        *self = Self::from_sorted(keys);

        if let Some(before) = before {
            debug!(
                "rebalanced {} keys, height {} -> {}",
                self.len,
                before,
                self.root_height()
            );
        }
    }

    /// Walks the tree lazily in the given order.
    pub fn traverse(&self, order: Order) -> Traversal<'_, K> {
        Traversal::new(self.root(), order)
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Keys<'_, K> {
        Keys::new(self.root())
    }

    /// The keys in breadth-first order, root first.
    pub fn level_order(&self) -> Vec<&K> {
        self.keys_in(Order::LevelOrder)
    }

    /// The keys in pre-order: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<&K> {
        self.keys_in(Order::PreOrder)
    }

    /// The keys in in-order: left subtree, node, right subtree. This is ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        self.keys_in(Order::InOrder)
    }

    /// The keys in post-order: left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<&K> {
        self.keys_in(Order::PostOrder)
    }

    fn keys_in(&self, order: Order) -> Vec<&K> {
        self.traverse(order).map(Node::key).collect()
    }

    /// Calls `visitor` once for each node in the given order.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingVisitor`] if `visitor` is `None`. Nothing is visited in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Node, Order, Tree, TreeError};
    ///
    /// let tree = Tree::build(1..=3);
    /// let mut seen = Vec::new();
    ///
    /// tree.for_each(Order::PreOrder, Some(|n: &Node<i32>| seen.push(*n.key())))
    ///     .unwrap();
    /// assert_eq!(seen, [2, 1, 3]);
    ///
    /// let missing = tree.for_each(Order::PreOrder, None::<fn(&Node<i32>)>);
    /// assert_eq!(missing, Err(TreeError::MissingVisitor(Order::PreOrder)));
    /// ```
    pub fn for_each<F>(&self, order: Order, visitor: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<K>),
    {
        let mut visitor = visitor.ok_or(TreeError::MissingVisitor(order))?;
        for node in self.traverse(order) {
            visitor(node);
        }
        Ok(())
    }

    /// [`Tree::for_each`] in level order.
    pub fn level_order_for_each<F>(&self, visitor: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<K>),
    {
        self.for_each(Order::LevelOrder, visitor)
    }

    /// [`Tree::for_each`] in pre-order.
    pub fn pre_order_for_each<F>(&self, visitor: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<K>),
    {
        self.for_each(Order::PreOrder, visitor)
    }

    /// [`Tree::for_each`] in in-order.
    pub fn in_order_for_each<F>(&self, visitor: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<K>),
    {
        self.for_each(Order::InOrder, visitor)
    }

    /// [`Tree::for_each`] in post-order.
    pub fn post_order_for_each<F>(&self, visitor: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<K>),
    {
        self.for_each(Order::PostOrder, visitor)
    }

    /// An ASCII drawing of the tree, see [`Pretty`].
    pub fn pretty(&self) -> Pretty<'_, K> {
        Pretty::new(self.root())
    }
}

/// Builds a minimum height subtree out of the next `len` keys of `keys`, which must be sorted.
/// The left half is built first so keys are consumed in order.
fn build_balanced<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build_balanced(keys, mid);
    let mut node = Node::new_boxed(keys.next()?);
    node.left = left;
    node.right = build_balanced(keys, len - mid - 1);

    Some(node)
}

/// Takes apart the subtree in `root`, returning its keys in order.
fn drain_in_order<K>(root: Link<K>, len: usize) -> Vec<K> {
    let mut keys = Vec::with_capacity(len);
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(mut node) = stack.pop() else {
            break;
        };
        current = node.right.take();
        let Node { key, .. } = *node;
        keys.push(key);
    }

    keys
}

/// Walks down from `link` to the slot that holds `key`, or the empty slot where it would be
/// inserted.
fn slot_for<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        let ordering = link.as_deref().map(|node| key.cmp(&node.key));
        match ordering {
            None | Some(Ordering::Equal) => return link,
            Some(ordering) => {
                if let Some(node) = link {
                    link = match ordering {
                        Ordering::Less => &mut node.left,
                        _ => &mut node.right,
                    };
                }
            }
        }
    }
}

/// Unlinks the leftmost node under `link` and returns its key. Its right child, if any, takes its
/// place.
fn detach_min<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let mut min = link.take()?;
    *link = min.right.take();
    let Node { key, .. } = *min;

    Some(key)
}
