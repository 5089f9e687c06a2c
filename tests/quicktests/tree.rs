use bstree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                assert_eq!(bst.remove(k), set.take(k));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.check_invariants().is_ok()
            && tree.len() == set.len()
            && tree.in_order().eq(set.iter())
    }

    fn in_order_is_sorted(xs: Vec<i16>) -> bool {
        let tree: Tree<i16> = xs.into_iter().collect();
        let keys: Vec<_> = tree.in_order().collect();

        keys.windows(2).all(|pair| pair[0] <= pair[1])
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.search(x).map(|n| n.key()) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none() && tree.iterative_search(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
    }

    fn size_is_inserts_minus_deletes(xs: HashSet<i16>, deletes: Vec<usize>) -> bool {
        let keys: Vec<_> = xs.into_iter().collect();
        let mut tree: Tree<i16> = keys.iter().copied().collect();

        let mut deleted = HashSet::new();
        if !keys.is_empty() {
            for index in deletes {
                let key = keys[index % keys.len()];
                tree.remove(&key);
                deleted.insert(key);
            }
        }

        tree.in_order().count() == keys.len() - deleted.len() && tree.len() == tree.in_order().count()
    }

    fn duplicates_do_not_grow(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let len = tree.len();
        tree.extend(xs.iter().copied());

        tree.len() == len && tree.in_order().count() == len
    }

    fn predecessor_successor_duality(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        xs.iter().all(|x| {
            let node = tree.search(x).expect("inserted key is present");
            let forward = node.successor().map_or(true, |next| next.predecessor() == Some(node));
            let backward = node.predecessor().map_or(true, |prev| prev.successor() == Some(node));
            forward && backward
        })
    }

    fn successor_walk_matches_in_order(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.into_iter().collect();

        let mut walked = Vec::new();
        let mut node = tree.first();
        while let Some(n) = node {
            walked.push(n.key());
            node = n.successor();
        }

        let mut backwards = Vec::new();
        let mut node = tree.last();
        while let Some(n) = node {
            backwards.push(n.key());
            node = n.predecessor();
        }
        backwards.reverse();

        tree.in_order().eq(walked.iter().copied()) && walked == backwards
    }

    fn clone_is_independent(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let original: Tree<i8> = xs.into_iter().collect();
        let mut copy = original.clone();
        for delete in &deletes {
            copy.remove(delete);
        }

        copy.check_invariants().is_ok()
            && original.check_invariants().is_ok()
            && original.pre_order().len() == original.len()
            && deletes.iter().all(|x| copy.search(x).is_none())
    }
}
