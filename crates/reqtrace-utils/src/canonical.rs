//! Canonical JSON emission.
//!
//! Reports are emitted in JCS (RFC 8785) canonical form so that equal inputs
//! produce byte-identical output — `coverage` run twice on unchanged files
//! diffs clean in CI.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize `value` as canonical JSON (JCS, RFC 8785).
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value = serde_json::to_value(value).context("failed to serialize value to JSON")?;
    let bytes = serde_json_canonicalizer::to_vec(&json_value)
        .context("failed to canonicalize JSON using JCS")?;
    String::from_utf8(bytes).context("JCS output contained invalid UTF-8")
}
