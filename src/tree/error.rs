//! Errors reported by the suffix tree library

use super::types::{NodeId, Symbol};
use thiserror::Error;

/// Input rejected before construction starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    /// The last symbol must not occur anywhere else in the text
    #[error("last symbol {symbol:?} is not a unique sentinel: it also occurs at position {first}")]
    MissingSentinel { symbol: Symbol, first: usize },

    #[error("sentinel {sentinel:?} already occurs in the input at position {position}")]
    SentinelInText { sentinel: Symbol, position: usize },
}

/// Structural property that a finished tree fails to satisfy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("expected {expected} leaves, found {found}")]
    LeafCount { expected: usize, found: usize },

    #[error("path to node {node} spells {found:?}, expected {expected:?}")]
    PathLabel {
        node: NodeId,
        expected: String,
        found: String,
    },

    #[error("suffix {start} has no leaf")]
    MissingSuffix { start: usize },

    #[error("edge keyed {key:?} below node {node} starts with {first:?}")]
    KeyMismatch {
        node: NodeId,
        key: Symbol,
        first: Symbol,
    },

    #[error("edge below node {node} keyed {key:?} is empty")]
    EmptyEdge { node: NodeId, key: Symbol },

    #[error("edge below node {node} keyed {key:?} is still open")]
    OpenEdge { node: NodeId, key: Symbol },

    #[error("internal node {node} has fewer than two children")]
    UnaryNode { node: NodeId },

    #[error("internal node {node} has no suffix link")]
    MissingSuffixLink { node: NodeId },

    #[error("suffix link {from} -> {to} spells {found:?}, expected {expected:?}")]
    WrongSuffixLink {
        from: NodeId,
        to: NodeId,
        expected: String,
        found: String,
    },

    #[error("root has a suffix link")]
    RootSuffixLink,
}
