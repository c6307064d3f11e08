//! Markdown outline rendering
//!
//! This module provides `MarkdownWriter` which renders outline entries in
//! one of two literal forms: a heading line whose `#` count equals the
//! entry's depth, or a wiki-style link line for names containing `.md`.

use std::io::{self, Write};

use crate::walk::OutlineSink;

/// Returns the wiki-link target for a name containing `.md`, with the
/// first occurrence removed.
///
/// Detection is by substring, not file extension, matching the tool this
/// replaces: `notes.md` becomes `notes`, but a name with `.md` mid-name is
/// also linked, so `my.md.backup` becomes `my.backup`. Only the first
/// occurrence is stripped (`a.md.md` becomes `a.md`). Returns `None` for
/// names without `.md`.
pub fn link_target(name: &str) -> Option<String> {
    let idx = name.find(".md")?;
    Some(format!("{}{}", &name[..idx], &name[idx + 3..]))
}

/// Writes outline entries as markdown to the underlying writer.
/// Implements the OutlineSink trait for use with OutlineWalker.
pub struct MarkdownWriter<W> {
    out: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Take ownership of the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutlineSink for MarkdownWriter<W> {
    fn entry(&mut self, name: &str, depth: usize) -> io::Result<()> {
        match link_target(name) {
            Some(target) => writeln!(self.out, "[[{}]]", target),
            None => writeln!(self.out, "{} {}", "#".repeat(depth), name),
        }
    }
}
