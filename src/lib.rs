//! # ukkonen - Online Suffix Tree Construction
//!
//! Builds the suffix tree of a text in a single left-to-right pass using
//! Ukkonen's algorithm, in amortized linear time, and lets callers watch
//! every step of the construction.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Text validation, the node arena, the construction engine
//!   and snapshot views
//! - [`output`] - Terminal summaries plus DOT and JSON step exporters
//! - [`utils`] - Configuration, input reading and progress bars
//!
//! ## Quick Start
//!
//! ```
//! use ukkonen::tree::{build, verify};
//!
//! // The last symbol must occur nowhere else in the text
//! let tree = build("banana$").unwrap();
//! assert_eq!(tree.leaf_count(), 7);
//! assert!(verify(&tree).is_ok());
//! ```
//!
//! ## Tracing
//!
//! Construction reports every extension to a caller-supplied
//! [`SnapshotSink`](tree::SnapshotSink). The engine itself performs no I/O;
//! exporters such as [`output::DotTrace`] do the writing.
//!
//! ```no_run
//! use ukkonen::output::DotTrace;
//! use ukkonen::tree::build_with_sink;
//! use ukkonen::utils::DotStyle;
//! use std::path::Path;
//!
//! let mut trace = DotTrace::new(Path::new("steps"), DotStyle::default()).unwrap();
//! build_with_sink("abcabxabcd$", &mut trace).unwrap();
//! println!("{} files written", trace.finish().unwrap());
//! ```

pub mod output;
pub mod tree;
pub mod utils;
