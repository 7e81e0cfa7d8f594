//! End-to-end checks of finished suffix trees.
//!
//! Covers the worked examples from the literature plus an exhaustive sweep
//! over every short string on a small alphabet.

use std::collections::{BTreeMap, BTreeSet};
use ukkonen::tree::{
    InputError, NodeId, Recorder, StepKind, StepView, SuffixTree, build, build_with_sink, verify,
};

/// Sorted first symbols of the edges below `node`
fn keys(tree: &SuffixTree, node: NodeId) -> Vec<char> {
    tree.node(node).edges.keys().copied().collect()
}

/// Concatenated labels from the root to every leaf, keyed by suffix start
fn leaf_paths(tree: &SuffixTree) -> BTreeMap<usize, String> {
    let n = tree.text().len();
    let mut paths = BTreeMap::new();
    let mut stack = vec![(NodeId::ROOT, String::new())];

    while let Some((node, path)) = stack.pop() {
        if tree.node(node).is_leaf() {
            paths.insert(n - path.chars().count(), path);
            continue;
        }
        for edge in tree.node(node).edges.values() {
            let mut child_path = path.clone();
            child_path.push_str(&tree.label(edge, n));
            stack.push((edge.child, child_path));
        }
    }

    paths
}

#[test]
fn scenario_distinct_symbols() {
    let tree = build("ab$").unwrap();

    assert_eq!(keys(&tree, tree.root()), vec!['$', 'a', 'b']);
    for edge in tree.node(tree.root()).edges.values() {
        assert!(tree.node(edge.child).is_leaf());
    }
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.node_count(), 4);
}

#[test]
fn scenario_repeated_prefix() {
    let tree = build("aab$").unwrap();

    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(keys(&tree, tree.root()), vec!['$', 'a', 'b']);

    let under_a = tree.edge(tree.root(), 'a').child;
    assert_eq!(keys(&tree, under_a), vec!['a', 'b']);
    for edge in tree.node(under_a).edges.values() {
        assert!(tree.node(edge.child).is_leaf());
    }
}

#[test]
fn scenario_classic_demo_string() {
    let input = "abcabxabcd$";

    // Remember which phase created each internal node
    let mut created: BTreeMap<NodeId, usize> = BTreeMap::new();
    let mut sink = |view: &StepView<'_>| {
        if let StepKind::Split { index, .. } = view.kind {
            // The split node is allocated just before its new leaf
            let middle = view.tree.node_count() - 2;
            let (id, _) = view.tree.nodes().nth(middle).unwrap();
            created.insert(id, index);
        }
    };
    let tree = build_with_sink(input, &mut sink).unwrap();

    assert_eq!(tree.leaf_count(), 11);
    assert_eq!(verify(&tree), Ok(()));

    let same_phase = tree.suffix_links().any(|(from, to)| {
        match (created.get(&from), created.get(&to)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    });
    assert!(same_phase, "expected a suffix link between nodes split in one phase");
}

#[test]
fn leaf_paths_spell_suffixes() {
    for input in ["banana$", "mississippi$", "abcabxabcd$", "aaaaaa$", "abababab$"] {
        let tree = build(input).unwrap();
        let paths = leaf_paths(&tree);
        let symbols: Vec<char> = input.chars().collect();

        assert_eq!(paths.len(), symbols.len(), "input {:?}", input);
        for (start, path) in paths {
            let suffix: String = symbols[start..].iter().collect();
            assert_eq!(path, suffix, "input {:?}", input);
        }
    }
}

#[test]
fn internal_nodes_have_suffix_links() {
    let tree = build("mississippi$").unwrap();

    for (id, node) in tree.nodes() {
        if id.is_root() {
            assert_eq!(node.suffix_link, None);
        } else if !node.is_leaf() {
            assert!(node.suffix_link.is_some(), "node {} has no suffix link", id);
        }
    }
}

#[test]
fn finalization_is_idempotent() {
    let mut tree = build("abcabxabcd$").unwrap();
    let before: Vec<_> = tree.edges().map(|(p, k, e)| (p, k, e.clone())).collect();

    assert_eq!(tree.finalize(), 0);

    let after: Vec<_> = tree.edges().map(|(p, k, e)| (p, k, e.clone())).collect();
    assert_eq!(before, after);
}

#[test]
fn outgoing_edges_have_distinct_first_symbols() {
    let tree = build("abracadabra$").unwrap();
    let alphabet: BTreeSet<char> = "abracadabra$".chars().collect();

    for (_, node) in tree.nodes() {
        assert!(node.edges.len() <= alphabet.len());
        for (key, edge) in &node.edges {
            assert_eq!(tree.text().at(edge.start), *key);
        }
    }
}

#[test]
fn multibyte_symbols_are_atomic() {
    let tree = build("αβαβγ").unwrap();
    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(verify(&tree), Ok(()));
    assert!(tree.node(tree.root()).edges.contains_key(&'β'));
}

#[test]
fn invalid_input_is_rejected_before_construction() {
    let mut recorder = Recorder::default();

    assert_eq!(
        build_with_sink("", &mut recorder).unwrap_err(),
        InputError::Empty
    );
    assert!(matches!(
        build_with_sink("ab$ab$", &mut recorder),
        Err(InputError::MissingSentinel { symbol: '$', first: 2 })
    ));
    assert!(matches!(
        build_with_sink("abca", &mut recorder),
        Err(InputError::MissingSentinel { symbol: 'a', first: 0 })
    ));

    // No step was ever reported
    assert!(recorder.snapshots.is_empty());
}

#[test]
fn every_step_keeps_active_point_consistent() {
    let mut recorder = Recorder::default();
    build_with_sink("abcabxabcd$", &mut recorder).unwrap();

    for snap in &recorder.snapshots {
        assert!(snap.remainder <= snap.read);
        match snap.active.edge {
            None => assert_eq!(snap.active.length, 0),
            Some(_) => {
                let edge = snap.active_edge().expect("active edge must exist");
                assert!(snap.active.length > 0);
                assert!(snap.active.length < edge.label.chars().count());
            }
        }
    }
}

/// Every string of length 0..=7 over {a, b, c}, terminated by '$'
#[test]
fn exhaustive_small_alphabet() {
    let alphabet = ['a', 'b', 'c'];
    let mut checked = 0;

    for len in 0..=7u32 {
        for mut code in 0..alphabet.len().pow(len) {
            let mut input = String::new();
            for _ in 0..len {
                input.push(alphabet[code % alphabet.len()]);
                code /= alphabet.len();
            }
            input.push('$');

            let tree = build(&input).unwrap();
            assert_eq!(verify(&tree), Ok(()), "input {:?}", input);
            checked += 1;
        }
    }

    assert_eq!(checked, 3280);
}
