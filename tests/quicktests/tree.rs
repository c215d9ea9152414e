use rebalance_bst::{Node, Order, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|key| tree.contains(key))
}

#[quickcheck]
fn in_order_is_sorted_distinct_input(xs: Vec<i32>) -> bool {
    let tree = Tree::build(xs.clone());
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.in_order().into_iter().copied().eq(expected)
}

#[quickcheck]
fn built_tree_is_balanced(xs: Vec<i32>) -> bool {
    Tree::build(xs).is_balanced()
}

#[quickcheck]
fn traversals_have_equal_length(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    Order::ALL
        .iter()
        .all(|order| tree.traverse(*order).count() == tree.len())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(Node::key) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.depth(x).is_none() && tree.height(x).is_none())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    tree.insert(x);
    let keys = tree.in_order().into_iter().copied().collect::<Vec<_>>();
    let height = tree.root_height();
    let len = tree.len();

    tree.insert(x);

    tree.in_order().into_iter().copied().eq(keys) && tree.root_height() == height && tree.len() == len
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn rebalance_keeps_keys(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.in_order().into_iter().copied().collect::<Vec<_>>();

    tree.rebalance();

    tree.is_balanced() && tree.in_order().into_iter().copied().eq(before)
}

#[quickcheck]
fn depth_never_decreases_in_level_order(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let depths = tree
        .level_order()
        .into_iter()
        .filter_map(|key| tree.depth(key))
        .collect::<Vec<_>>();

    depths.len() == tree.len()
        && depths.first().map_or(true, |root| *root == 0)
        && depths.windows(2).all(|pair| pair[0] <= pair[1])
}
