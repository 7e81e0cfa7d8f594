//! Suffix tree construction module
//!
//! Builds the suffix tree of a single text in one left-to-right pass using
//! Ukkonen's algorithm. Edges reference the text by index range, so the tree
//! takes O(n) space regardless of how many distinct substrings it encodes.
//!
//! ## Architecture
//!
//! - `types`: Text buffer, node, edge and id definitions
//! - `arena`: Node storage and the structural edits (leaf insertion, splits)
//! - `active_point`: The construction cursor and its canonicalization
//! - `builder`: The extension loop, suffix-link wiring and finalization
//! - `snapshot`: Read-only step views for external observers
//! - `verify`: Structural checks on finished trees
//! - `stats`: Shape summaries
//!
//! ## Input contract
//!
//! The last symbol of the text must occur nowhere else. [`Text`] enforces
//! this before any node is created.

pub mod active_point;
pub mod arena;
pub mod builder;
pub mod error;
pub mod snapshot;
pub mod stats;
pub mod types;
pub mod verify;

// Re-exports for convenience
pub use active_point::ActivePoint;
pub use arena::SuffixTree;
pub use builder::{Extension, SuffixTreeBuilder, build, build_text, build_with_sink};
pub use error::{InputError, Violation};
pub use snapshot::{NoopSink, Recorder, Snapshot, SnapshotSink, StepKind, StepView};
pub use stats::TreeStats;
pub use types::{Edge, EdgeEnd, Node, NodeId, Symbol, Text};
pub use verify::verify;
