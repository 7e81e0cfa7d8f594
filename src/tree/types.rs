//! Types for suffix tree construction
//!
//! Nodes live in an arena addressed by [`NodeId`]. Parent to child ownership
//! is expressed by [`Edge::child`]; suffix links and the active point are
//! plain ids that never imply ownership.

use super::error::InputError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single input symbol. Each `char` is treated as one atomic symbol.
pub type Symbol = char;

/// Stable index of a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first node allocated
    pub const ROOT: NodeId = NodeId(0);

    /// Position of this node in the arena
    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// End boundary of an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Grows with the text until finalization closes it
    Open,
    /// Fixed exclusive end index into the text
    Closed(usize),
}

impl EdgeEnd {
    /// Resolve against the number of symbols read so far
    #[inline]
    pub fn resolve(self, read: usize) -> usize {
        match self {
            EdgeEnd::Open => read,
            EdgeEnd::Closed(end) => end,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, EdgeEnd::Open)
    }
}

/// Labeled transition from a node to its child, labeled `text[start..end)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Start index of the label (inclusive)
    pub start: usize,
    /// End index of the label (exclusive), possibly still open
    pub end: EdgeEnd,
    /// The node this edge owns
    pub child: NodeId,
}

impl Edge {
    /// Label length given `read` symbols of text seen so far
    #[inline]
    pub fn resolved_length(&self, read: usize) -> usize {
        self.end.resolve(read) - self.start
    }
}

/// Tree vertex
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Outgoing edges keyed by the first symbol of their label
    pub edges: BTreeMap<Symbol, Edge>,
    /// Node spelling this node's path label minus its first symbol
    pub suffix_link: Option<NodeId>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Immutable input text, validated to end with a unique sentinel
///
/// Construction assumes no suffix is a proper prefix of another. That only
/// holds when the final symbol occurs nowhere else, so the check happens
/// here, before any tree is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    symbols: Vec<Symbol>,
}

impl Text {
    /// Validate a symbol sequence whose last symbol acts as the sentinel
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, InputError> {
        let Some((&sentinel, body)) = symbols.split_last() else {
            return Err(InputError::Empty);
        };

        if let Some(first) = body.iter().position(|&s| s == sentinel) {
            return Err(InputError::MissingSentinel {
                symbol: sentinel,
                first,
            });
        }

        Ok(Self { symbols })
    }

    /// Append `sentinel` to `input` after checking it does not already occur
    pub fn with_sentinel(input: &str, sentinel: Symbol) -> Result<Self, InputError> {
        if let Some(position) = input.chars().position(|s| s == sentinel) {
            return Err(InputError::SentinelInText { sentinel, position });
        }

        let mut symbols: Vec<Symbol> = input.chars().collect();
        symbols.push(sentinel);
        Self::new(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a validated text; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The terminating sentinel symbol
    pub fn sentinel(&self) -> Symbol {
        self.symbols[self.symbols.len() - 1]
    }

    /// Symbol at `index`
    #[inline]
    pub fn at(&self, index: usize) -> Symbol {
        self.symbols[index]
    }

    /// Collect `text[start..end)` into a string
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.symbols[start..end].iter().collect()
    }
}

impl TryFrom<&str> for Text {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.chars().collect())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accepts_unique_sentinel() {
        let text = Text::try_from("banana$").unwrap();
        assert_eq!(text.len(), 7);
        assert_eq!(text.sentinel(), '$');
        assert_eq!(text.slice(1, 4), "ana");
    }

    #[test]
    fn test_text_rejects_empty() {
        assert_eq!(Text::try_from(""), Err(InputError::Empty));
    }

    #[test]
    fn test_text_rejects_repeated_last_symbol() {
        // "banana" ends in 'a', which already occurs at index 1
        assert_eq!(
            Text::try_from("banana"),
            Err(InputError::MissingSentinel {
                symbol: 'a',
                first: 1
            })
        );
        assert!(Text::try_from("a$b$").is_err());
    }

    #[test]
    fn test_with_sentinel() {
        let text = Text::with_sentinel("abc", '$').unwrap();
        assert_eq!(text.to_string(), "abc$");

        assert_eq!(
            Text::with_sentinel("a$c", '$'),
            Err(InputError::SentinelInText {
                sentinel: '$',
                position: 1
            })
        );
    }

    #[test]
    fn test_single_symbol_is_valid() {
        let text = Text::try_from("$").unwrap();
        assert_eq!(text.len(), 1);
    }

    #[test]
    fn test_edge_resolved_length() {
        let open = Edge {
            start: 2,
            end: EdgeEnd::Open,
            child: NodeId(1),
        };
        assert_eq!(open.resolved_length(5), 3);

        let closed = Edge {
            start: 2,
            end: EdgeEnd::Closed(4),
            child: NodeId(1),
        };
        assert_eq!(closed.resolved_length(9), 2);
    }
}
