//! Depth-first traversal over a directory tree

use std::error::Error;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::collector::PathCollector;
use super::filter::{EntryKind, FilterSet};

/// Receives the non-fatal failures a walk runs into.
///
/// The walker reports and moves on; a failure never aborts the
/// traversal or unwinds already collected results.
pub trait ErrorSink {
    fn report(&mut self, diagnostic: WalkDiagnostic);
}

/// The filesystem operation a diagnostic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOp {
    /// Opening or iterating a directory failed.
    ReadDir,
    /// Reading an entry's (non-dereferenced) metadata failed.
    Lstat,
}

impl WalkOp {
    fn name(self) -> &'static str {
        match self {
            WalkOp::ReadDir => "read_dir",
            WalkOp::Lstat => "lstat",
        }
    }
}

/// One failed entry: the operation, the path it failed on, and the
/// underlying I/O error.
#[derive(Debug)]
pub struct WalkDiagnostic {
    op: WalkOp,
    path: PathBuf,
    source: io::Error,
}

impl WalkDiagnostic {
    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self {
            op: WalkOp::ReadDir,
            path,
            source,
        }
    }

    pub(crate) fn lstat(path: PathBuf, source: io::Error) -> Self {
        Self {
            op: WalkOp::Lstat,
            path,
            source,
        }
    }

    pub fn op(&self) -> WalkOp {
        self.op
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying I/O failure.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

impl fmt::Display for WalkDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): {}",
            self.op.name(),
            self.path.display(),
            self.source
        )
    }
}

impl Error for WalkDiagnostic {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// One in-progress directory: its accumulated path and the entry names
/// read from it, consumed front to back in iteration order.
struct DirFrame {
    path: PathBuf,
    names: Vec<OsString>,
    cursor: usize,
}

impl DirFrame {
    fn new(path: PathBuf, names: Vec<OsString>) -> Self {
        Self {
            path,
            names,
            cursor: 0,
        }
    }

    fn next_name(&mut self) -> Option<OsString> {
        let name = self.names.get(self.cursor)?;
        self.cursor += 1;
        Some(name.clone())
    }
}

/// Depth-first walker that reports entries in directory-iteration
/// order, parents before their contents.
///
/// Recursion is replaced by a heap-allocated frame stack, so traversal
/// depth is bounded by memory rather than the native call stack, and at
/// most one directory handle is open at a time.
pub struct Walker {
    filter: FilterSet,
}

impl Walker {
    pub fn new(filter: FilterSet) -> Self {
        Self { filter }
    }

    /// Walk the tree under `start_dir`, appending matched descendant
    /// paths to `out`.
    ///
    /// The start directory itself is never emitted. An unreadable
    /// directory skips that directory's contents, a failed metadata
    /// read skips that entry, and the walk continues either way.
    /// Symlinks are reported but never entered, whatever they point at.
    pub fn walk<E: ErrorSink>(&self, start_dir: &Path, out: &mut PathCollector, errors: &mut E) {
        let mut stack: Vec<DirFrame> = Vec::new();

        match read_names(start_dir) {
            Ok(names) => stack.push(DirFrame::new(start_dir.to_path_buf(), names)),
            Err(e) => {
                errors.report(WalkDiagnostic::read_dir(start_dir.to_path_buf(), e));
                return;
            }
        }

        loop {
            let child = {
                let Some(frame) = stack.last_mut() else { break };
                match frame.next_name() {
                    Some(name) => frame.path.join(name),
                    None => {
                        stack.pop();
                        continue;
                    }
                }
            };

            let metadata = match fs::symlink_metadata(&child) {
                Ok(metadata) => metadata,
                Err(e) => {
                    errors.report(WalkDiagnostic::lstat(child, e));
                    continue;
                }
            };

            let kind = EntryKind::from(metadata.file_type());
            if kind.is_walkable_dir() {
                // A matched directory is emitted before its contents.
                if self.filter.accept(kind) {
                    out.push(child.clone());
                }
                match read_names(&child) {
                    Ok(names) => stack.push(DirFrame::new(child, names)),
                    Err(e) => errors.report(WalkDiagnostic::read_dir(child, e)),
                }
            } else if self.filter.accept(kind) {
                out.push(child);
            }
        }
    }
}

/// Read a directory's entry names in iteration order, closing the
/// handle before returning. `read_dir` never yields the `.` and `..`
/// pseudo-entries, so nothing filters them out downstream.
fn read_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name());
    }
    Ok(names)
}
