use ordered_tree::Tree;

use std::collections::HashSet;

use crate::{nodes, recomputed_height};

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();

        let mut sorted = xs;
        sorted.sort();
        keys == sorted
    }
}

quickcheck::quickcheck! {
    fn heights_match_recursive_definition(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let height = recomputed_height(tree.root());

        // Each pair from the listing carries its own node's cached height.
        let listed: Vec<_> = tree.iter().map(|(_, h)| h).collect();
        let mut expected = Vec::new();
        let mut stack = Vec::new();
        let mut node = tree.root();
        loop {
            while let Some(n) = node {
                stack.push(n);
                node = n.left();
            }
            let Some(n) = stack.pop() else {
                break;
            };
            expected.push(n.height());
            node = n.right();
        }

        height == tree.height() && listed == expected
    }
}

quickcheck::quickcheck! {
    fn heights_stay_correct_after_every_insert(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in xs {
            tree.insert(x);
            if recomputed_height(tree.root()) != tree.height() {
                return false;
            }
        }
        true
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn min_and_max(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        tree.min_value() == xs.iter().min() && tree.max_value() == xs.iter().max()
    }
}

quickcheck::quickcheck! {
    fn duplicates_never_land_left(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        nodes(tree.root()).into_iter().all(|n| {
            let left_ok = n.left().map_or(true, |l| l.iter().all(|(k, _)| k < n.key()));
            let right_ok = n.right().map_or(true, |r| r.iter().all(|(k, _)| k >= n.key()));
            left_ok && right_ok
        })
    }
}

quickcheck::quickcheck! {
    fn duplicates_add_nodes(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        tree.iter().count() == xs.len() && nodes(tree.root()).len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn height_is_idempotent(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let first = tree.height();

        (0..3).all(|_| tree.height() == first)
    }
}

quickcheck::quickcheck! {
    fn empty_iff_nothing_inserted(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        tree.is_empty() == xs.is_empty() && (tree.height() == -1) == xs.is_empty()
    }
}

quickcheck::quickcheck! {
    fn collect_matches_insert(xs: Vec<i8>) -> bool {
        let inserted = build(&xs);
        let collected: Tree<_> = xs.into_iter().collect();

        inserted.to_string() == collected.to_string()
    }
}
