use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Without rebalancing this is a single
/// chain of right children.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting values so that the resultant tree is balanced and has `num_levels`
/// of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..).take(num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Every iteration gets a fresh clone so mutations
/// don't leak between iterations.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // The unbalanced trees stop at 2^11 since each operation on them is linear.
    for num_levels in [3, 7, 11, 15] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;

        let mut tree_tests = vec![("balanced", get_balanced_tree(num_levels))];
        if num_levels <= 11 {
            tree_tests.push(("unbalanced", get_unbalanced_tree(num_levels)));
        }

        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _node = black_box(tree.search(&i).is_some());
    });
    bench_helper(c, "iterative-search", |tree, i| {
        let _node = black_box(tree.iterative_search(&i).is_some());
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_helper(c, "remove-root", |tree, _| {
        let root = tree.root().map(|n| *n.key());
        if let Some(root) = root {
            tree.remove(&root);
        }
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "search-miss", |tree, i| {
        let _node = black_box(tree.iterative_search(&(i + 1)).is_some());
    });
    bench_helper(c, "successor-walk", |tree, _| {
        let mut node = tree.first();
        while let Some(n) = node {
            node = black_box(n.successor());
        }
    });
    bench_helper(c, "in-order", |tree, _| {
        black_box(tree.in_order().count());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
