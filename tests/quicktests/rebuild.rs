use midpoint_bst::rebuild::{Node, Tree};

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                if tree.insert(k.clone()) != set.insert(k.clone()) {
                    return false;
                }
            }
            Op::Remove(k) => {
                if tree.remove(k) != set.remove(k) {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    true
}

/// Checks the BST ordering, the stored heights and the balance of every node, returning the
/// subtree's height.
fn check_node<K: Ord>(node: Option<&Node<K>>, lower: Option<&K>, upper: Option<&K>) -> Option<usize> {
    let node = match node {
        Some(node) => node,
        None => return Some(0),
    };
    if lower.is_some_and(|l| node.key() <= l) || upper.is_some_and(|u| node.key() >= u) {
        return None;
    }

    let left = check_node(node.left(), lower, Some(node.key()))?;
    let right = check_node(node.right(), Some(node.key()), upper)?;
    let height = left.max(right) + 1;

    if left.abs_diff(right) > 1 || node.height() != height {
        return None;
    }
    Some(height)
}

fn min_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.iter().eq(set.iter())
        && check_node(tree.root(), None, None) == Some(min_height(set.len()))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x) && tree.search_path(x).found(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| {
        let path = tree.search_path(x);
        !tree.contains(x) && !path.found(x) && path.is_empty() == tree.is_empty()
    })
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_order_does_not_matter(xs: Vec<i8>) -> bool {
    let mut forwards = Tree::new();
    let mut backwards = Tree::new();
    for x in &xs {
        forwards.insert(*x);
    }
    for x in xs.iter().rev() {
        backwards.insert(*x);
    }

    forwards == backwards && forwards == Tree::from_keys(xs)
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::from_keys(xs);
    tree.insert(x);
    let once = tree.clone();
    tree.insert(x);

    tree == once
}

#[quickcheck]
fn insert_then_remove_is_identity(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::from_keys(xs);
    if tree.contains(&x) {
        return true;
    }
    let before = tree.clone();
    tree.insert(x);
    tree.remove(&x);

    tree == before
}

#[quickcheck]
fn search_path_descends(xs: Vec<i8>, target: i8) -> bool {
    let tree = Tree::from_keys(xs);
    let path = tree.search_path(&target);

    // Every step goes to the child on the target's side of its parent.
    path.nodes().windows(2).all(|pair| {
        let (parent, child) = (pair[0], pair[1]);
        let expected = if target < *parent.key() {
            parent.left()
        } else {
            parent.right()
        };
        expected.is_some_and(|n| std::ptr::eq(n, child))
    })
}

#[test]
fn round_trip_scenario() {
    let keys = [15, 23, 29, 33, 37, 41, 44, 49, 52, 54];
    let mut tree = Tree::new();
    for k in keys {
        tree.insert(k);
    }

    assert_eq!(tree.inorder(), keys.iter().collect::<Vec<_>>());
    assert_eq!(tree.height(), 4);

    assert!(!tree.contains(&110));
    let path = tree.search_path(&110);
    assert!(!path.is_empty());
    assert_eq!(path.last().map(|n| *n.key()), Some(54));

    tree.insert(110);
    assert!(tree.contains(&110));
    assert_eq!(tree.search_path(&110).last().map(|n| *n.key()), Some(110));
}
