//! Entry classification and kind filtering

use std::fs;

/// Kind of a directory entry, as seen without following symlinks.
///
/// A symlink is always `Symlink`, whatever it points at; a directory
/// reached through a symlink is therefore never `Dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Symlink,
    Dir,
    File,
    /// Sockets, fifos, and device nodes. These match only when no kind
    /// filter is active.
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

impl EntryKind {
    /// Whether a walk may descend into this entry. Only real
    /// directories qualify, so symlinked directories stay closed.
    pub fn is_walkable_dir(self) -> bool {
        matches!(self, EntryKind::Dir)
    }
}

/// The set of entry kinds a walk reports.
///
/// Built once from the command-line flags and passed by value. The
/// default (empty) set accepts entries of every kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub symlinks: bool,
    pub dirs: bool,
    pub files: bool,
}

impl FilterSet {
    /// True when no kind is selected, meaning every entry matches.
    pub fn is_empty(self) -> bool {
        !(self.symlinks || self.dirs || self.files)
    }

    /// Whether an entry of `kind` passes the filter.
    pub fn accept(self, kind: EntryKind) -> bool {
        if self.is_empty() {
            return true;
        }
        match kind {
            EntryKind::Symlink => self.symlinks,
            EntryKind::Dir => self.dirs,
            EntryKind::File => self.files,
            EntryKind::Other => false,
        }
    }
}
