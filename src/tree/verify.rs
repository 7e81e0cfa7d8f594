//! Structural checks for finished trees
//!
//! Walks the whole tree once and confirms that it really is the suffix tree
//! of its text. Cost is proportional to the total length of all root-to-leaf
//! paths, so this is meant for tests, fuzzing and `--verify` runs rather than
//! hot paths.

use super::arena::SuffixTree;
use super::error::Violation;
use super::types::NodeId;

/// Where each node's path label occurs in the text: `(start, depth)`
fn path_spans(tree: &SuffixTree) -> Result<Vec<(usize, usize)>, Violation> {
    let n = tree.text().len();
    let mut spans = vec![(0, 0); tree.node_count()];
    let mut stack = vec![NodeId::ROOT];

    while let Some(node) = stack.pop() {
        let (start, depth) = spans[node.index()];

        for (&key, edge) in &tree.node(node).edges {
            let end = edge.end.resolve(n);
            if edge.end.is_open() {
                return Err(Violation::OpenEdge { node, key });
            }
            if end <= edge.start {
                return Err(Violation::EmptyEdge { node, key });
            }

            let first = tree.text().at(edge.start);
            if first != key {
                return Err(Violation::KeyMismatch { node, key, first });
            }

            // The child's occurrence must start with the parent's path label
            let child_depth = depth + (end - edge.start);
            let child_start = end - child_depth;
            let symbols = tree.text().symbols();
            if symbols[child_start..child_start + depth] != symbols[start..start + depth] {
                return Err(Violation::PathLabel {
                    node: edge.child,
                    expected: tree.text().slice(start, start + depth),
                    found: tree.text().slice(child_start, child_start + depth),
                });
            }

            spans[edge.child.index()] = (child_start, child_depth);
            stack.push(edge.child);
        }
    }

    Ok(spans)
}

/// Check every structural property a finished suffix tree must have
pub fn verify(tree: &SuffixTree) -> Result<(), Violation> {
    let text = tree.text();
    let n = text.len();
    let spans = path_spans(tree)?;

    if tree.node(NodeId::ROOT).suffix_link.is_some() {
        return Err(Violation::RootSuffixLink);
    }

    let mut seen = vec![false; n];
    let mut leaves = 0;

    for (id, node) in tree.nodes() {
        let (start, depth) = spans[id.index()];

        if node.is_leaf() {
            leaves += 1;

            // A leaf at depth d must spell the suffix starting at n - d
            let suffix = n - depth;
            if start != suffix {
                return Err(Violation::PathLabel {
                    node: id,
                    expected: text.slice(suffix, n),
                    found: text.slice(start, start + depth),
                });
            }
            seen[suffix] = true;
            continue;
        }

        if id.is_root() {
            continue;
        }

        if node.edges.len() < 2 {
            return Err(Violation::UnaryNode { node: id });
        }

        let Some(target) = node.suffix_link else {
            return Err(Violation::MissingSuffixLink { node: id });
        };
        let (to_start, to_depth) = spans[target.index()];
        let expected = &text.symbols()[start + 1..start + depth];
        let found = &text.symbols()[to_start..to_start + to_depth];
        if expected != found {
            return Err(Violation::WrongSuffixLink {
                from: id,
                to: target,
                expected: expected.iter().collect(),
                found: found.iter().collect(),
            });
        }
    }

    if leaves != n {
        return Err(Violation::LeafCount {
            expected: n,
            found: leaves,
        });
    }

    if let Some(start) = seen.iter().position(|&s| !s) {
        return Err(Violation::MissingSuffix { start });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use crate::tree::types::Text;

    #[test]
    fn test_verify_built_trees() {
        for s in ["$", "ab$", "aab$", "banana$", "mississippi$", "abcabxabcd$"] {
            let tree = build(s).unwrap();
            assert_eq!(verify(&tree), Ok(()), "input {:?}", s);
        }
    }

    #[test]
    fn test_verify_rejects_open_edges() {
        let mut tree = SuffixTree::with_root(Text::try_from("ab$").unwrap());
        tree.add_leaf(NodeId::ROOT, 'a', 0);
        assert!(matches!(verify(&tree), Err(Violation::OpenEdge { .. })));
    }

    #[test]
    fn test_verify_rejects_missing_leaves() {
        let mut tree = SuffixTree::with_root(Text::try_from("ab$").unwrap());
        tree.add_leaf(NodeId::ROOT, 'a', 0);
        tree.finalize();
        assert_eq!(
            verify(&tree),
            Err(Violation::LeafCount {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_verify_rejects_missing_suffix_link() {
        let mut tree = SuffixTree::with_root(Text::try_from("aab$").unwrap());
        tree.add_leaf(NodeId::ROOT, 'a', 0);
        let middle = tree.split_edge(NodeId::ROOT, 'a', 1, 3);
        tree.add_leaf(middle, 'b', 2);
        tree.add_leaf(NodeId::ROOT, 'b', 2);
        tree.add_leaf(NodeId::ROOT, '$', 3);
        tree.finalize();

        assert_eq!(
            verify(&tree),
            Err(Violation::MissingSuffixLink { node: middle })
        );

        tree.set_suffix_link(middle, NodeId::ROOT);
        assert_eq!(verify(&tree), Ok(()));
    }
}
