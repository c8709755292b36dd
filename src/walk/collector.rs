//! Append-only collection of matched paths

use std::path::PathBuf;
use std::slice;

/// Enough slots for a typical small listing before the first regrowth.
const INITIAL_CAPACITY: usize = 64;

/// Matched paths in the order they were discovered.
///
/// Each stored path is an owned copy, so the collection outlives any
/// buffers the walker reuses. Everything is freed together when the
/// collector is consumed or dropped.
#[derive(Debug)]
pub struct PathCollector {
    paths: Vec<PathBuf>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self {
            paths: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append a path at the end, keeping insertion order.
    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    /// Hand the collected paths to the caller.
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl Default for PathCollector {
    fn default() -> Self {
        Self::new()
    }
}
