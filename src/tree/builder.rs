//! Online suffix tree builder (Ukkonen)
//!
//! Consumes the text one symbol per phase. Each phase runs extensions until
//! either every pending suffix is explicit or the current symbol turns out
//! to be present already, in which case the remaining suffixes stay implicit
//! until a later phase.
//!
//! Total work is amortized O(n): every extension that changes the tree also
//! decrements `remainder`, and cursor hops are paid for by earlier descents.

use super::active_point::ActivePoint;
use super::arena::SuffixTree;
use super::error::InputError;
use super::snapshot::{NoopSink, SnapshotSink, StepKind, StepView};
use super::types::{NodeId, Symbol, Text};
use log::{debug, trace};

/// Result of one extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// A leaf was added; keep extending while suffixes remain
    Extended {
        leaf: NodeId,
        /// Internal node created by splitting, if the cursor was mid-edge
        split: Option<NodeId>,
    },
    /// The symbol already follows the cursor; stop this phase
    AlreadyPresent,
}

/// Incremental construction engine
pub struct SuffixTreeBuilder {
    tree: SuffixTree,
    active: ActivePoint,
    /// Suffixes of the text read so far that are not yet explicit
    remainder: usize,
    /// Internal node created earlier in this phase still waiting for its link
    pending_link: Option<NodeId>,
    /// Symbols consumed
    read: usize,
    steps: usize,
}

impl SuffixTreeBuilder {
    pub fn new(text: Text) -> Self {
        Self {
            tree: SuffixTree::with_root(text),
            active: ActivePoint::default(),
            remainder: 0,
            pending_link: None,
            read: 0,
            steps: 0,
        }
    }

    pub fn tree(&self) -> &SuffixTree {
        &self.tree
    }

    pub fn active(&self) -> ActivePoint {
        self.active
    }

    pub fn remainder(&self) -> usize {
        self.remainder
    }

    pub fn read(&self) -> usize {
        self.read
    }

    pub fn is_done(&self) -> bool {
        self.read == self.tree.text().len()
    }

    /// Process the next symbol of the text
    ///
    /// Returns `false` once the whole text has been consumed.
    pub fn phase<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.is_done() {
            return false;
        }

        let index = self.read;
        let symbol = self.tree.text().at(index);
        self.read += 1;
        self.remainder += 1;
        self.pending_link = None;

        while self.remainder > 0 {
            let outcome = self.extend(symbol, index);

            let kind = match outcome {
                Extension::Extended { split: None, .. } => StepKind::Leaf { index, symbol },
                Extension::Extended { split: Some(_), .. } => StepKind::Split { index, symbol },
                Extension::AlreadyPresent => StepKind::Present { index, symbol },
            };
            self.notify(sink, kind);

            if outcome == Extension::AlreadyPresent {
                break;
            }
        }

        true
    }

    /// One extension for `symbol` at text position `index`
    fn extend(&mut self, symbol: Symbol, index: usize) -> Extension {
        let read = index + 1;

        if self.active.descend(&self.tree, symbol) {
            // The pending node's path minus its first symbol ends right at
            // the active node.
            self.link_pending(self.active.node);
            self.active.canonicalize(&self.tree, read, read);

            trace!(
                "phase {}: {:?} present, remainder {}, active {:?}",
                index, symbol, self.remainder, self.active
            );
            return Extension::AlreadyPresent;
        }

        let (leaf, split) = match self.active.edge {
            None => {
                let leaf = self.tree.add_leaf(self.active.node, symbol, index);
                self.link_pending(self.active.node);
                (leaf, None)
            }
            Some(first) => {
                let middle =
                    self.tree
                        .split_edge(self.active.node, first, self.active.length, read);
                let leaf = self.tree.add_leaf(middle, symbol, index);
                self.link_pending(middle);
                self.pending_link = Some(middle);
                (leaf, Some(middle))
            }
        };
        self.remainder -= 1;

        trace!(
            "phase {}: {} for {:?}, remainder {}",
            index,
            if split.is_some() { "split" } else { "leaf" },
            symbol,
            self.remainder
        );

        self.advance_cursor(index);
        Extension::Extended { leaf, split }
    }

    /// Point the pending internal node, if any, at `target` and clear it
    fn link_pending(&mut self, target: NodeId) {
        if let Some(pending) = self.pending_link.take() {
            self.tree.set_suffix_link(pending, target);
        }
    }

    /// Move the cursor to the start of the next shorter suffix
    fn advance_cursor(&mut self, index: usize) {
        if self.active.node.is_root() {
            self.active.length = self.active.length.saturating_sub(1);
            self.active.edge = if self.active.length > 0 {
                Some(self.tree.text().at(index + 1 - self.remainder))
            } else {
                None
            };
        } else {
            self.active.node = self.tree.node(self.active.node).suffix_link.unwrap_or(NodeId::ROOT);
        }

        self.active.canonicalize(&self.tree, index + 1, index);
    }

    fn notify<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S, kind: StepKind) {
        let view = StepView {
            step: self.steps,
            kind,
            tree: &self.tree,
            active: self.active,
            read: self.read,
            remainder: self.remainder,
        };
        sink.observe(&view);
        self.steps += 1;
    }

    /// Consume the remaining text, close open edges and return the tree
    pub fn finish<S: SnapshotSink + ?Sized>(mut self, sink: &mut S) -> SuffixTree {
        while self.phase(sink) {}

        let closed = self.tree.finalize();
        debug!(
            "finalized tree over {} symbols: {} nodes, {} open edges closed",
            self.read,
            self.tree.node_count(),
            closed
        );
        self.notify(sink, StepKind::Finalized);

        self.tree
    }
}

/// Build the suffix tree of `input`, whose last symbol must be unique
pub fn build(input: &str) -> Result<SuffixTree, InputError> {
    build_with_sink(input, &mut NoopSink)
}

/// Build the suffix tree of `input`, reporting every step to `sink`
pub fn build_with_sink<S: SnapshotSink + ?Sized>(
    input: &str,
    sink: &mut S,
) -> Result<SuffixTree, InputError> {
    let text = Text::try_from(input)?;
    Ok(build_text(text, sink))
}

/// Build from an already validated text
pub fn build_text<S: SnapshotSink + ?Sized>(text: Text, sink: &mut S) -> SuffixTree {
    debug!("building suffix tree over {} symbols", text.len());
    SuffixTreeBuilder::new(text).finish(sink)
}
