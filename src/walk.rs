//! Directory tree walking logic
//!
//! `OutlineWalker` performs a depth-first pre-order traversal and feeds
//! each surviving entry to an `OutlineSink`, one line per entry. The
//! traversal runs on an explicit work stack rather than the call stack,
//! so tree depth is bounded by memory instead of recursion limits.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::exclude::is_excluded;

/// Callback seam for outline output - receives one entry per line.
///
/// `depth` is the entry's distance from the traversal root; the root's
/// direct children are at depth 1.
pub trait OutlineSink {
    fn entry(&mut self, name: &str, depth: usize) -> io::Result<()>;
}

/// One pending entry on the traversal stack.
struct WorkItem {
    path: PathBuf,
    name: String,
    depth: usize,
    is_dir: bool,
}

/// Depth-first walker emitting entries in pre-order with sorted siblings.
///
/// At each level, entries are sorted ascending by name in code-point order
/// and excluded names are dropped, subtree included. A directory's children
/// are emitted strictly after its own line and before the next sibling.
#[derive(Debug, Default)]
pub struct OutlineWalker;

impl OutlineWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and emit every non-excluded entry to `sink`.
    ///
    /// Any directory-listing failure is returned to the caller and aborts
    /// the walk; lines already emitted stay emitted.
    pub fn walk<S: OutlineSink>(&self, root: &Path, sink: &mut S) -> io::Result<()> {
        let mut stack = Vec::new();
        push_children(root, 1, &mut stack)?;

        while let Some(item) = stack.pop() {
            sink.entry(&item.name, item.depth)?;
            if item.is_dir {
                push_children(&item.path, item.depth + 1, &mut stack)?;
            }
        }
        Ok(())
    }
}

/// List `dir`, sort the names ascending, drop excluded ones, and push the
/// survivors in reverse so the lexicographically smallest pops first.
fn push_children(dir: &Path, depth: usize, stack: &mut Vec<WorkItem>) -> io::Result<()> {
    let mut entries: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((name, entry.path()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path) in entries.into_iter().rev() {
        if is_excluded(&name) {
            continue;
        }
        // is_dir follows symlinks; a broken link counts as a non-directory
        let is_dir = path.is_dir();
        stack.push(WorkItem {
            path,
            name,
            depth,
            is_dir,
        });
    }
    Ok(())
}
