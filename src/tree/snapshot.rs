//! Read-only views of the tree handed to observers during construction
//!
//! The builder never formats or writes anything itself. After every
//! extension, and once after finalization, it calls the injected
//! [`SnapshotSink`] with a borrowed [`StepView`]. Sinks that need a detached
//! copy call [`StepView::snapshot`]; sinks that don't pay nothing.

use super::active_point::ActivePoint;
use super::arena::SuffixTree;
use super::types::{NodeId, Symbol};
use serde::Serialize;

/// What happened in the step that produced a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    /// A leaf was attached directly to the active node
    Leaf { index: usize, symbol: Symbol },
    /// An edge was split and a leaf attached to the new internal node
    Split { index: usize, symbol: Symbol },
    /// The symbol was already present; the phase stopped early
    Present { index: usize, symbol: Symbol },
    /// All open edges were closed
    Finalized,
}

/// Borrowed state of the tree at the end of one step
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    /// Sequence number of this step, starting at 0
    pub step: usize,
    pub kind: StepKind,
    pub tree: &'a SuffixTree,
    pub active: ActivePoint,
    /// Number of text symbols consumed so far
    pub read: usize,
    pub remainder: usize,
}

impl StepView<'_> {
    /// Materialize a self-contained copy of this view
    pub fn snapshot(&self) -> Snapshot {
        let tree = self.tree;

        let nodes = tree
            .nodes()
            .map(|(id, node)| SnapshotNode {
                id,
                leaf: node.is_leaf(),
            })
            .collect();

        let edges = tree
            .edges()
            .map(|(parent, key, edge)| SnapshotEdge {
                parent,
                child: edge.child,
                key,
                label: tree.label(edge, self.read),
                open: edge.end.is_open(),
            })
            .collect();

        Snapshot {
            step: self.step,
            kind: self.kind,
            read: self.read,
            remainder: self.remainder,
            nodes,
            edges,
            active: self.active,
            suffix_links: tree
                .suffix_links()
                .map(|(from, to)| SuffixLink { from, to })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotNode {
    pub id: NodeId,
    pub leaf: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEdge {
    pub parent: NodeId,
    pub child: NodeId,
    /// First symbol of the label
    pub key: Symbol,
    /// Label resolved against the symbols read so far
    pub label: String,
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuffixLink {
    pub from: NodeId,
    pub to: NodeId,
}

/// Detached copy of the tree state after one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub step: usize,
    pub kind: StepKind,
    pub read: usize,
    pub remainder: usize,
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
    pub active: ActivePoint,
    pub suffix_links: Vec<SuffixLink>,
}

impl Snapshot {
    /// The edge the active point is walking, if any
    pub fn active_edge(&self) -> Option<&SnapshotEdge> {
        let key = self.active.edge?;
        self.edges
            .iter()
            .find(|e| e.parent == self.active.node && e.key == key)
    }
}

/// Observer notified after every construction step
pub trait SnapshotSink {
    fn observe(&mut self, view: &StepView<'_>);
}

/// Sink that ignores every step
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl SnapshotSink for NoopSink {
    #[inline]
    fn observe(&mut self, _view: &StepView<'_>) {}
}

/// Sink that keeps every snapshot in memory
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotSink for Recorder {
    fn observe(&mut self, view: &StepView<'_>) {
        self.snapshots.push(view.snapshot());
    }
}

impl<F> SnapshotSink for F
where
    F: FnMut(&StepView<'_>),
{
    fn observe(&mut self, view: &StepView<'_>) {
        self(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_with_sink;

    #[test]
    fn test_recorder_sees_every_step() {
        let mut recorder = Recorder::default();
        build_with_sink("ab$", &mut recorder).unwrap();

        // Three leaf insertions plus the finalization step
        assert_eq!(recorder.snapshots.len(), 4);
        for (i, snap) in recorder.snapshots.iter().enumerate() {
            assert_eq!(snap.step, i);
        }
        assert_eq!(
            recorder.snapshots.last().map(|s| s.kind),
            Some(StepKind::Finalized)
        );
    }

    #[test]
    fn test_labels_follow_read_boundary() {
        let mut recorder = Recorder::default();
        build_with_sink("aab$", &mut recorder).unwrap();

        // Step 0 reads "a", step 1 finds "a" already present
        let first = &recorder.snapshots[0];
        assert_eq!(first.read, 1);
        assert_eq!(first.edges.len(), 1);
        assert_eq!(first.edges[0].label, "a");
        assert!(first.edges[0].open);

        let second = &recorder.snapshots[1];
        assert_eq!(second.kind, StepKind::Present { index: 1, symbol: 'a' });
        assert_eq!(second.edges[0].label, "aa");
        assert_eq!(second.active.length, 1);
        assert_eq!(second.active_edge().map(|e| e.key), Some('a'));
    }

    #[test]
    fn test_closure_sink() {
        let mut steps = 0;
        let mut count = |_: &StepView<'_>| steps += 1;
        build_with_sink("abc$", &mut count).unwrap();
        assert_eq!(steps, 5);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut recorder = Recorder::default();
        build_with_sink("ab$", &mut recorder).unwrap();
        let json = serde_json::to_string(&recorder.snapshots[0]).unwrap();
        assert!(json.contains("\"kind\":\"leaf\""));
        assert!(json.contains("\"label\":\"a\""));
    }
}
