//! Foundation utilities for reqtrace
//!
//! This crate holds the entity model shared by every other workspace member,
//! the error taxonomy with its exit-code mapping, atomic file writes, path
//! normalization for cross-document references, canonical JSON emission, and
//! tracing setup.

pub mod atomic_write;
pub mod canonical;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod paths;
pub mod types;

pub use error::{ConfigError, InputError, ReconcileError, ReqTraceError};
pub use exit_codes::ExitCode;
pub use types::{
    CoverageReport, IssueRule, RefTarget, Requirement, ResolvedRef, Severity, SourceLocation, Task,
    TaskStatus, ValidationIssue,
};
