//! reqtrace - requirement-to-task traceability
//!
//! reqtrace links `FR-NNN` requirement declarations in a specification
//! document to the checklist tasks that claim to satisfy them. It computes
//! coverage, validates the reference graph (orphaned references, uncovered
//! requirements, duplicate declarations), and reconciles reference
//! annotations across task-list regeneration.
//!
//! reqtrace can be used in two ways:
//! - **CLI**: `reqtrace coverage`, `locate`, `tasks`, `validate`, `reconcile`
//! - **Library**: load a [`DocumentSet`](xref::DocumentSet) and call its
//!   query operations directly, or register the traceability rules with a
//!   host validation pipeline
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Coverage for a spec/tasks pair
//! reqtrace coverage --spec specs/auth/spec.md --tasks specs/auth/tasks.md
//!
//! # Gate CI on the reference graph
//! reqtrace validate --strict
//!
//! # Reattach references after regenerating the task list
//! reqtrace reconcile --old tasks.md.orig --new tasks.md
//! ```
//!
//! # Reference annotations
//!
//! ```text
//! - [ ] Implement parser [FR-001]
//! - [x] Wire config [FR-001, FR-003]
//! - [ ] Align with core API [../core/spec.md#FR-010]
//! ```
//!
//! # Exit codes
//!
//! `validate` exits 0 when there are no issues (or only warnings outside
//! strict mode), 1 when any ERROR-severity issue exists, 2 when an input
//! file is missing or unreadable.
//!
//! # JSON output
//!
//! All JSON is emitted in JCS (RFC 8785) canonical form, so repeated runs on
//! unchanged inputs are byte-identical.

pub mod cli;
pub mod config;
pub mod report;
pub mod xref;

// Re-exports for library consumers.
pub use config::{CliOverrides, Config};
pub use reqtrace_analysis::rules::{
    RuleContext, RuleReport, TRACEABILITY_CATEGORY, TraceabilityRule, registry, run_rules,
};
pub use reqtrace_reconcile::{
    DEFAULT_SIMILARITY_THRESHOLD, ReconcileOptions, ReconcileOutcome, annotate_document, reconcile,
};
pub use reqtrace_utils::error::ReqTraceError;
pub use reqtrace_utils::exit_codes::ExitCode;
pub use reqtrace_utils::types::{
    CoverageReport, IssueRule, RefTarget, Requirement, Severity, SourceLocation, Task, TaskStatus,
    ValidationIssue,
};
pub use xref::DocumentSet;
