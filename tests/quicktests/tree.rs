use plain_bst::Tree;

use std::collections::HashMap;

use crate::Op;

/// Applies a set of operations to a tree and a count of each value.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, counts: &mut HashMap<T, usize>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => {
                if tree.remove(x) {
                    let count = counts.get_mut(x).expect("removed a value never added");
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(x);
                    }
                }
            }
            Op::Balance => tree.balance(),
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = HashMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        tree.size() == counts.values().sum::<usize>()
            && counts.keys().all(|x| tree.get(x) == Some(x))
            && (i8::MIN..=i8::MAX)
                .filter(|x| !counts.contains_key(x))
                .all(|x| !tree.contains(&x))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.get(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present = xs;
        for remove in &removes {
            let expected = match still_present.iter().position(|x| x == remove) {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    true
                }
                None => false,
            };
            if tree.remove(remove) != expected {
                return false;
            }
        }

        still_present.sort();
        tree.inorder_iter().copied().eq(still_present)
    }
}

quickcheck::quickcheck! {
    fn balance_is_minimum_height(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.balance();

        // floor(lg n) for n > 0.
        let expected = match xs.len() {
            0 => -1,
            n => (usize::BITS - 1 - n.leading_zeros()) as i32,
        };
        tree.height() == expected && tree.is_balanced()
    }
}
