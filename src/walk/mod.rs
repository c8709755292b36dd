//! Directory tree walking
//!
//! The walker visits entries in directory-iteration order, classifies
//! each one from lstat-style metadata, and appends matches to a
//! [`PathCollector`] before descending, so a matched directory always
//! precedes its own contents. Failures go to an [`ErrorSink`] and never
//! abort the traversal.

mod collector;
mod filter;
mod walker;

pub use collector::PathCollector;
pub use filter::{EntryKind, FilterSet};
pub use walker::{ErrorSink, WalkDiagnostic, WalkOp, Walker};
