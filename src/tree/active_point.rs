//! Construction cursor
//!
//! The active point marks where the next extension starts: a node, plus an
//! optional partial walk along one of its edges.

use super::arena::SuffixTree;
use super::types::{NodeId, Symbol};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivePoint {
    pub node: NodeId,
    /// First symbol of the edge being walked; `None` exactly when `length == 0`
    pub edge: Option<Symbol>,
    /// Symbols consumed along `edge`
    pub length: usize,
}

impl Default for ActivePoint {
    fn default() -> Self {
        Self::at(NodeId::ROOT)
    }
}

impl ActivePoint {
    /// Cursor sitting exactly on `node`
    pub fn at(node: NodeId) -> Self {
        Self {
            node,
            edge: None,
            length: 0,
        }
    }

    /// Whether one more `symbol` can be read from the current position
    pub fn can_descend(&self, tree: &SuffixTree, symbol: Symbol) -> bool {
        match self.edge {
            None => tree.has_edge(self.node, symbol),
            Some(first) => {
                let edge = tree.edge(self.node, first);
                tree.text().at(edge.start + self.length) == symbol
            }
        }
    }

    /// Move one `symbol` deeper into the tree
    ///
    /// Returns `false`, leaving the cursor untouched, when no transition on
    /// `symbol` exists from the current position.
    pub fn descend(&mut self, tree: &SuffixTree, symbol: Symbol) -> bool {
        if !self.can_descend(tree, symbol) {
            return false;
        }

        if self.edge.is_none() {
            self.edge = Some(symbol);
        }
        self.length += 1;
        true
    }

    /// Hop over every edge the cursor has fully consumed
    ///
    /// `read` resolves open edges; `end` is the exclusive text index where the
    /// string spelled by the cursor ends, used to recover the next edge symbol
    /// after each hop. Every iteration strictly shrinks `length`, and no edge
    /// is empty, so the loop terminates in at most `length` steps.
    pub fn canonicalize(&mut self, tree: &SuffixTree, read: usize, end: usize) -> usize {
        let mut hops = 0;

        while let Some(first) = self.edge {
            let edge = tree.edge(self.node, first);
            let edge_len = edge.resolved_length(read);

            if self.length < edge_len {
                break;
            }

            self.node = edge.child;
            self.length -= edge_len;
            self.edge = if self.length == 0 {
                None
            } else {
                Some(tree.text().at(end - self.length))
            };
            hops += 1;
        }

        hops
    }
}
