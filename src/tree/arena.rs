//! Node arena and structural edits
//!
//! Every node is stored in a flat `Vec` and never moves or disappears once
//! created, so a [`NodeId`] handed out during construction stays valid for
//! the lifetime of the tree.

use super::types::*;

/// Suffix tree over a single validated [`Text`]
#[derive(Debug, Clone)]
pub struct SuffixTree {
    text: Text,
    nodes: Vec<Node>,
}

impl SuffixTree {
    /// Tree holding only the root
    pub(crate) fn with_root(text: Text) -> Self {
        // A tree over n symbols has at most 2n nodes
        let mut nodes = Vec::with_capacity(text.len() * 2);
        nodes.push(Node::default());
        Self { text, nodes }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in allocation order, paired with their ids
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Every `(parent, first symbol, edge)` triple in allocation order of parents
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Symbol, &Edge)> {
        self.nodes()
            .flat_map(|(id, node)| node.edges.iter().map(move |(&key, edge)| (id, key, edge)))
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Defined suffix links as `(from, to)` pairs
    pub fn suffix_links(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes()
            .filter_map(|(id, node)| node.suffix_link.map(|to| (id, to)))
    }

    /// Label of `edge` resolved against `read` symbols
    pub fn label(&self, edge: &Edge, read: usize) -> String {
        self.text.slice(edge.start, edge.end.resolve(read))
    }

    /// Strict transition lookup
    ///
    /// # Panics
    ///
    /// Panics when `node` has no edge keyed by `symbol`. Callers only ask for
    /// transitions that the construction invariants guarantee to exist.
    #[inline]
    pub fn edge(&self, node: NodeId, symbol: Symbol) -> &Edge {
        match self.nodes[node.0].edges.get(&symbol) {
            Some(edge) => edge,
            None => panic!("node {} has no transition on {:?}", node, symbol),
        }
    }

    #[inline]
    pub fn has_edge(&self, node: NodeId, symbol: Symbol) -> bool {
        self.nodes[node.0].edges.contains_key(&symbol)
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        id
    }

    /// Attach a fresh leaf below `node` through the open edge `[start, Open)`
    ///
    /// # Panics
    ///
    /// Panics if `node` already has an edge keyed by `symbol`.
    pub(crate) fn add_leaf(&mut self, node: NodeId, symbol: Symbol, start: usize) -> NodeId {
        assert!(
            !self.has_edge(node, symbol),
            "node {} already has a transition on {:?}",
            node,
            symbol
        );

        let leaf = self.alloc();
        self.nodes[node.0].edges.insert(
            symbol,
            Edge {
                start,
                end: EdgeEnd::Open,
                child: leaf,
            },
        );
        leaf
    }

    /// Split the edge below `node` keyed by `symbol` after `split_len` symbols
    ///
    /// The edge keeps its key and start but now ends at the new internal node,
    /// which adopts the previous child through the remainder of the label.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < split_len < L`, where `L` is the edge length
    /// resolved against `read`.
    pub(crate) fn split_edge(
        &mut self,
        node: NodeId,
        symbol: Symbol,
        split_len: usize,
        read: usize,
    ) -> NodeId {
        let edge = self.edge(node, symbol).clone();
        let length = edge.resolved_length(read);
        assert!(
            split_len > 0 && split_len < length,
            "cannot split edge of length {} at {}",
            length,
            split_len
        );

        let split_at = edge.start + split_len;
        let key = self.text.at(split_at);
        let middle = self.alloc();

        self.nodes[middle.0].edges.insert(
            key,
            Edge {
                start: split_at,
                end: edge.end,
                child: edge.child,
            },
        );

        let Some(shortened) = self.nodes[node.0].edges.get_mut(&symbol) else {
            unreachable!("edge looked up above");
        };
        shortened.end = EdgeEnd::Closed(split_at);
        shortened.child = middle;

        middle
    }

    pub(crate) fn set_suffix_link(&mut self, from: NodeId, to: NodeId) {
        debug_assert!(!from.is_root(), "the root never gets a suffix link");
        self.nodes[from.0].suffix_link = Some(to);
    }

    /// Close every open edge at the full text length
    ///
    /// Returns the number of edges closed; a second call closes none.
    pub fn finalize(&mut self) -> usize {
        let end = self.text.len();
        let mut closed = 0;

        for node in &mut self.nodes {
            for edge in node.edges.values_mut() {
                if edge.end.is_open() {
                    edge.end = EdgeEnd::Closed(end);
                    closed += 1;
                }
            }
        }

        closed
    }

    /// Whether any edge is still open
    pub fn is_finalized(&self) -> bool {
        self.edges().all(|(_, _, edge)| !edge.end.is_open())
    }
}
