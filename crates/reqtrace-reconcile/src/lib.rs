//! Reference reconciliation across task-list regeneration.
//!
//! When a task document is regenerated, the generator knows nothing about
//! existing reference annotations and emits reference-free checklist lines.
//! This crate reattaches the previously recorded references by matching new
//! task descriptions against old ones, and rewrites the document without
//! touching task text or status.

pub mod reconciler;
pub mod rewrite;
pub mod similarity;

pub use reconciler::{
    DEFAULT_SIMILARITY_THRESHOLD, MatchSource, ReconcileOptions, ReconcileOutcome,
    ReconciledTask, UnmatchedReference, reconcile,
};
pub use rewrite::annotate_document;
pub use similarity::{normalize, similarity};
