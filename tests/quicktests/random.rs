use plain_bst::Tree;
use rand::{seq::SliceRandom, thread_rng, Rng};
use std::collections::HashSet;

#[test]
fn letters_walk_through() {
    let tree: Tree<_> = "dbacfeg".chars().collect();

    assert_eq!(tree.inorder_iter().collect::<String>(), "abcdefg");
    assert_eq!(tree.preorder_iter().collect::<String>(), "dbacfeg");
    assert_eq!(tree.postorder_iter().collect::<String>(), "acbegfd");
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.size(), 7);
    assert!(tree.is_balanced());

    let mut tree = tree;
    assert!(tree.remove(&'a'));
    assert_eq!(tree.inorder_iter().collect::<String>(), "bcdefg");
}

#[test]
fn ascending_letters_rebalance() {
    let mut tree: Tree<_> = "abcdefg".chars().collect();
    assert_eq!(tree.height(), 6);
    assert_eq!(tree.size(), 7);
    assert!(!tree.is_balanced());

    tree.balance();

    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
    assert_eq!(tree.inorder_iter().collect::<String>(), "abcdefg");
}

#[test]
fn random_op_test() {
    let mut tree = Tree::new();

    let n = 5000;

    let mut rng = thread_rng();

    let mut values = HashSet::new();
    while values.len() < n {
        values.insert(rng.gen::<u16>() as i32);
    }
    let mut values: Vec<_> = values.into_iter().collect();

    for &value in values.iter() {
        tree.add(value);
    }
    assert_eq!(tree.size(), n);

    for &value in values.iter() {
        assert_eq!(tree.get(&value), Some(&value));
    }

    values.shuffle(&mut rng);
    let removed_values = values.split_off(n / 2);
    for &value in removed_values.iter() {
        assert!(tree.remove(&value));
    }
    assert_eq!(tree.size(), n - n / 2);

    for &value in removed_values.iter() {
        assert!(tree.get(&value).is_none());
        assert!(!tree.remove(&value));
    }

    tree.balance();
    assert!(tree.is_balanced());

    values.sort();
    assert!(tree.inorder_iter().eq(values.iter()));

    values.shuffle(&mut rng);
    for &value in values.iter() {
        assert!(tree.remove(&value));
    }
    assert!(tree.is_empty());
}

#[test]
fn same_values_across_insertion_orders() {
    let mut rng = thread_rng();
    let mut values: Vec<u32> = (0..500).map(|x| x % 97).collect();

    let first: Tree<_> = values.iter().copied().collect();
    values.shuffle(&mut rng);
    let second: Tree<_> = values.iter().copied().collect();

    assert!(first.same_values(&second));
    assert!(second.same_values(&first));
    assert!(first.same_values(&first));
}
