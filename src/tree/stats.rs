use super::arena::SuffixTree;
use super::types::NodeId;
use serde::Serialize;

/// Shape summary of a suffix tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TreeStats {
    /// Symbols in the text, sentinel included
    pub text_len: usize,
    pub nodes: usize,
    /// Internal nodes, root included
    pub internal: usize,
    pub leaves: usize,
    pub edges: usize,
    pub suffix_links: usize,
    /// Longest path label ending at an internal node
    pub max_internal_depth: usize,
    /// Distinct symbols below the root
    pub alphabet: usize,
}

impl TreeStats {
    pub fn collect(tree: &SuffixTree) -> Self {
        let read = tree.text().len();
        let leaves = tree.leaf_count();

        let mut max_internal_depth = 0;
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = tree.node(id);
            if node.is_leaf() {
                continue;
            }
            max_internal_depth = max_internal_depth.max(depth);
            for edge in node.edges.values() {
                stack.push((edge.child, depth + edge.resolved_length(read)));
            }
        }

        Self {
            text_len: read,
            nodes: tree.node_count(),
            internal: tree.node_count() - leaves,
            leaves,
            edges: tree.edges().count(),
            suffix_links: tree.suffix_links().count(),
            max_internal_depth,
            alphabet: tree.node(NodeId::ROOT).edges.len(),
        }
    }
}
