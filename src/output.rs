//! Result listing and diagnostic rendering

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::walk::{ErrorSink, WalkDiagnostic};

/// Write the collected paths, one per line, in slice order.
pub fn write_paths<W: Write>(out: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        write_path_line(out, path)?;
    }
    Ok(())
}

/// One path and a newline. Unix writes the raw `OsStr` bytes, so entry
/// names that are not valid UTF-8 reach the pipe unmodified.
#[cfg(unix)]
fn write_path_line<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(path.as_os_str().as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_path_line<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}

/// Renders walk diagnostics onto a line-oriented writer as they arrive.
///
/// Reporting is best-effort: a failing writer must not take the walk
/// down with it, so write errors are swallowed.
pub struct DiagnosticSink<W: Write> {
    writer: W,
}

impl<W: Write> DiagnosticSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Hand back the writer, e.g. a buffer a test captured into.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ErrorSink for DiagnosticSink<W> {
    fn report(&mut self, diagnostic: WalkDiagnostic) {
        let _ = writeln!(self.writer, "{}", diagnostic);
    }
}
