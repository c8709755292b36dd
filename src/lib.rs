//! Dirwalk - a find-style walker that lists entries by kind

pub mod collate;
pub mod output;
pub mod walk;

pub use output::{write_paths, DiagnosticSink};
pub use walk::{EntryKind, ErrorSink, FilterSet, PathCollector, WalkDiagnostic, WalkOp, Walker};
