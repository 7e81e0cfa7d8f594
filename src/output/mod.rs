//! Output formatting: terminal summaries and step exporters
//!
//! - [`dot`] - Graphviz files, one per construction step
//! - [`json`] - JSON Lines snapshots

pub mod dot;
pub mod json;

pub use dot::{DotTrace, render_dot};
pub use json::JsonTrace;

use crate::tree::TreeStats;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a labeled statistics block
pub fn print_stats(stats: &TreeStats, verified: Option<bool>, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_stats(&mut out, stats, verified)
}

fn write_stats<W: WriteColor>(
    out: &mut W,
    stats: &TreeStats,
    verified: Option<bool>,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "Suffix Tree")?;
    out.reset()?;
    writeln!(out, "===========")?;

    let rows = [
        ("Text length:", stats.text_len),
        ("Nodes:", stats.nodes),
        ("Internal nodes:", stats.internal),
        ("Leaves:", stats.leaves),
        ("Edges:", stats.edges),
        ("Suffix links:", stats.suffix_links),
        ("Max depth:", stats.max_internal_depth),
        ("Alphabet:", stats.alphabet),
    ];
    for (label, value) in rows {
        write!(out, "{:18}", label)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", value)?;
        out.reset()?;
    }

    if let Some(ok) = verified {
        write!(out, "{:18}", "Verified:")?;
        let (color, text) = if ok {
            (Color::Green, "ok")
        } else {
            (Color::Red, "FAILED")
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        writeln!(out, "{}", text)?;
        out.reset()?;
    }

    Ok(())
}

/// One line of batch output
#[derive(Debug, Clone)]
pub struct BatchLine {
    pub line_number: usize,
    pub outcome: Result<TreeStats, String>,
}

/// Print per-line batch results in `line:leaves:nodes` form
pub fn print_batch(lines: &[BatchLine], color: bool) -> io::Result<()> {
    let mut out = stdout(color);

    for line in lines {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", line.line_number)?;
        out.reset()?;
        write!(out, ":")?;

        match &line.outcome {
            Ok(stats) => writeln!(
                out,
                "{} leaves, {} nodes, {} suffix links",
                stats.leaves, stats.nodes, stats.suffix_links
            )?,
            Err(message) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                writeln!(out, "{}", message)?;
                out.reset()?;
            }
        }
    }

    Ok(())
}
