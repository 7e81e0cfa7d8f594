use crate::tree::{InputError, Symbol, Text};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Where the CLI takes its text from
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Inline(&'a str),
    File(&'a Path),
    Stdin,
}

impl<'a> Source<'a> {
    pub fn pick(inline: Option<&'a str>, file: Option<&'a Path>) -> Self {
        match (inline, file) {
            (Some(text), _) => Source::Inline(text),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        }
    }

    /// Read the raw text, dropping a single trailing line break
    pub fn read(self) -> Result<String> {
        let raw = match self {
            Source::Inline(text) => return Ok(text.to_string()),
            Source::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            Source::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                buffer
            }
        };
        Ok(trim_line_break(&raw).to_string())
    }
}

pub fn trim_line_break(raw: &str) -> &str {
    raw.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(raw)
}

/// Validate `raw`, appending `sentinel` first when asked to
pub fn prepare_text(raw: &str, append: bool, sentinel: Symbol) -> Result<Text, InputError> {
    if append {
        Text::with_sentinel(raw, sentinel)
    } else {
        Text::try_from(raw)
    }
}
