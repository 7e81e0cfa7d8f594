//! JSON Lines export of construction steps

use crate::tree::{SnapshotSink, StepView};
use anyhow::{Context, Result};
use std::io::Write;

/// Sink writing one serialized [`Snapshot`](crate::tree::Snapshot) per line
pub struct JsonTrace<W: Write> {
    out: W,
    written: usize,
    error: Option<anyhow::Error>,
}

impl<W: Write> JsonTrace<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    fn write_step(&mut self, view: &StepView<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, &view.snapshot())
            .with_context(|| format!("Failed to serialize step {}", view.step))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Flush and return the number of lines written, or the first error
    pub fn finish(mut self) -> Result<usize> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.out.flush().context("Failed to flush trace output")?;
        Ok(self.written)
    }
}

impl<W: Write> SnapshotSink for JsonTrace<W> {
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
