//! Error taxonomy with exit-code mapping.
//!
//! Content-derived problems (orphaned references, uncovered requirements,
//! malformed annotations) are never errors here — they travel as
//! [`ValidationIssue`](crate::types::ValidationIssue) values in result
//! structures. `ReqTraceError` covers the conditions that abort an operation:
//! unreadable input, invalid configuration, and invalid reconcile parameters.
//!
//! Library code returns `ReqTraceError` and does NOT call
//! `std::process::exit()`; the CLI maps errors to exit codes at the boundary.

use crate::exit_codes::ExitCode;
use thiserror::Error;

/// Top-level error type for reqtrace library operations.
#[derive(Error, Debug)]
pub enum ReqTraceError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("reconcile error: {0}")]
    Reconcile(#[from] ReconcileError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReqTraceError {
    /// Map to the CLI exit code contract:
    /// 2 for unreadable input and usage/config errors, 1 otherwise.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Input(_) | Self::Config(_) | Self::Reconcile(_) => ExitCode::INPUT,
            Self::Io(_) => ExitCode::FAILURE,
        }
    }
}

/// Failures reading the documents an operation was pointed at.
///
/// These are a distinct, user-facing failure mode (exit status 2), separate
/// from any content-level issue found inside a readable document.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("{path} is not valid UTF-8 text")]
    NotText { path: String },
}

/// Configuration file or CLI argument errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Invalid reconciliation parameters.
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("similarity threshold {value} is outside [0.0, 1.0]")]
    ThresholdOutOfRange { value: f64 },
}
