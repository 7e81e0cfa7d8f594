//! Graphviz export of construction steps
//!
//! Writes one `step_<n>.dot` file per step. The active node is filled, the
//! active edge label is split with `|` at the cursor offset, and suffix
//! links are drawn dotted.

use crate::tree::{StepView, SnapshotSink};
use crate::utils::DotStyle;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Render a single step as a DOT graph
pub fn render_dot<W: Write>(view: &StepView<'_>, style: &DotStyle, out: &mut W) -> io::Result<()> {
    let tree = view.tree;
    let active = view.active;

    writeln!(out, "digraph G {{")?;
    writeln!(out, "rankdir = {};", style.rankdir)?;
    writeln!(out, "nodesep = {};", style.nodesep)?;
    writeln!(
        out,
        "{} [color=\"{}\", style=\"filled\"]",
        active.node, style.active_color
    )?;

    for (parent, key, edge) in tree.edges() {
        let label = tree.label(edge, view.read);
        let label = if parent == active.node && active.edge == Some(key) {
            // Byte offset of the cursor inside the label
            let split = label
                .char_indices()
                .nth(active.length)
                .map(|(i, _)| i)
                .unwrap_or(label.len());
            format!("{}|{}", escape(&label[..split]), escape(&label[split..]))
        } else {
            escape(&label)
        };

        writeln!(
            out,
            "{} -> {} [label=\"{}\", color=\"{}\"]",
            parent, edge.child, label, style.edge_color
        )?;
    }

    for (from, to) in tree.suffix_links() {
        writeln!(out, "{} -> {} [style=\"dotted\"]", from, to)?;
    }

    writeln!(out, "}}")?;
    Ok(())
}

fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Sink writing every step into a directory of DOT files
pub struct DotTrace {
    dir: PathBuf,
    style: DotStyle,
    written: usize,
    error: Option<anyhow::Error>,
}

impl DotTrace {
    /// Create the output directory if needed
    pub fn new(dir: &Path, style: DotStyle) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create trace directory {}", dir.display()))?;

        Ok(Self {
            dir: dir.to_path_buf(),
            style,
            written: 0,
            error: None,
        })
    }

    /// Path of the file for step `step`
    pub fn step_path(&self, step: usize) -> PathBuf {
        self.dir.join(format!("step_{}.dot", step))
    }

    fn write_step(&self, view: &StepView<'_>) -> Result<()> {
        let path = self.step_path(view.step);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        render_dot(view, &self.style, &mut out)
            .and_then(|_| out.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Number of files written, or the first error hit while writing
    pub fn finish(self) -> Result<usize> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.written),
        }
    }
}

impl SnapshotSink for DotTrace {
    fn observe(&mut self, view: &StepView<'_>) {
        if self.error.is_some() {
            return;
        }

        match self.write_step(view) {
            Ok(()) => self.written += 1,
            Err(e) => self.error = Some(e),
        }
    }
}
