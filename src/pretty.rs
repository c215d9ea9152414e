//! An ASCII drawing of a tree, one node per line, turned on its side: the right subtree is drawn
//! above its parent and the left subtree below.
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let tree = Tree::build(1..=3);
//!
//! assert_eq!(tree.pretty().to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
//! ```
//!
//! Only [`Node::key`], [`Node::left`] and [`Node::right`] are used, so any subtree can be drawn.

use std::fmt;

use crate::node::Node;

/// Wraps a possibly absent subtree so it can be displayed. An absent subtree draws nothing.
pub struct Pretty<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<'a, K> Pretty<'a, K> {
    /// Draws the subtree rooted at `root`.
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self { root }
    }
}

/// Work left on the stack while drawing.
enum Frame<'a, K> {
    /// Draw this whole subtree.
    Subtree {
        node: &'a Node<K>,
        prefix: String,
        is_left: bool,
    },
    /// Draw just this node's own line.
    Line {
        node: &'a Node<K>,
        prefix: String,
        is_left: bool,
    },
}

impl<'a, K> fmt::Display for Pretty<'a, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Frame<'a, K>> = self
            .root
            .map(|node| Frame::Subtree {
                node,
                prefix: String::new(),
                is_left: true,
            })
            .into_iter()
            .collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Line {
                    node,
                    prefix,
                    is_left,
                } => {
                    let branch = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}{}", prefix, branch, node.key())?;
                }
                // Pushed in reverse: right subtree, own line, then left subtree.
                Frame::Subtree {
                    node,
                    prefix,
                    is_left,
                } => {
                    if let Some(left) = node.left() {
                        stack.push(Frame::Subtree {
                            node: left,
                            prefix: format!("{}{}", prefix, if is_left { "    " } else { "│   " }),
                            is_left: true,
                        });
                    }
                    let right = node.right().map(|right| Frame::Subtree {
                        node: right,
                        prefix: format!("{}{}", prefix, if is_left { "│   " } else { "    " }),
                        is_left: false,
                    });
                    stack.push(Frame::Line {
                        node,
                        prefix,
                        is_left,
                    });
                    stack.extend(right);
                }
            }
        }

        Ok(())
    }
}
