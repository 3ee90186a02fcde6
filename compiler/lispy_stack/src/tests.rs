use super::*;

/// Nesting depth well past what an 8MB main-thread stack survives unguarded.
const DEEP: usize = 200_000;

#[test]
fn passes_through_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 42), 42);
}

#[test]
fn passes_through_result_type() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Err("boom"));
    assert_eq!(result, Err("boom"));
}

#[test]
fn guarded_recursion_survives_deep_nesting() {
    fn nest(depth: usize) -> usize {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    assert_eq!(nest(DEEP), DEEP);
}

#[test]
fn guarded_recursion_over_owned_tree() {
    enum Tree {
        Leaf,
        Node(Box<Tree>),
    }

    fn depth(tree: &Tree) -> usize {
        ensure_sufficient_stack(|| match tree {
            Tree::Leaf => 0,
            Tree::Node(inner) => depth(inner) + 1,
        })
    }

    fn unwind(tree: Tree) {
        let mut current = tree;
        while let Tree::Node(inner) = current {
            current = *inner;
        }
    }

    let mut tree = Tree::Leaf;
    for _ in 0..DEEP {
        tree = Tree::Node(Box::new(tree));
    }
    assert_eq!(depth(&tree), DEEP);
    unwind(tree);
}
