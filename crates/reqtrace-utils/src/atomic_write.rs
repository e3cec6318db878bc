//! Atomic file writes for rewritten task documents.
//!
//! The reconciler is the only component that writes back to a task document,
//! and that write must never leave a half-written file behind: content goes
//! to a temporary file in the target directory, is fsynced, and is then
//! renamed over the destination. A crash at any point leaves either the old
//! document or the new one, never a mix.

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Atomically replace `path` with `content` (temp file + fsync + rename).
///
/// Line endings are normalized to LF and the parent directory is created if
/// missing. The temporary file lives in the target directory so the final
/// rename stays on one filesystem.
pub fn write_atomic(path: &Utf8Path, content: &str) -> Result<()> {
    let content = normalize_line_endings(content);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent directory {parent}"))?;
    }

    let dir = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {dir}"))?;

    tmp.write_all(content.as_bytes())
        .context("failed to write temporary file")?;
    tmp.as_file()
        .sync_all()
        .context("failed to fsync temporary file")?;

    tmp.persist(path.as_std_path())
        .map_err(|e| anyhow::Error::new(e.error))
        .with_context(|| format!("failed to atomically replace {path}"))?;

    Ok(())
}

/// Normalize CRLF and lone CR to LF.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}
