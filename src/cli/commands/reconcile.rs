//! Reconcile command implementation.
//!
//! Reads the old (annotated) and new (regenerated) task documents, carries
//! references over, and atomically rewrites the new document. The write is
//! the only mutation this tool ever performs on a task file, and `--dry-run`
//! skips it entirely.

use camino::Utf8Path;
use tracing::info;

use crate::config::Config;
use crate::xref::read_document;
use reqtrace_extraction::extract_tasks;
use reqtrace_reconcile::{ReconcileOptions, annotate_document, reconcile};
use reqtrace_utils::atomic_write::write_atomic;
use reqtrace_utils::error::ReqTraceError;
use reqtrace_utils::exit_codes::ExitCode;
use reqtrace_utils::paths::lexical_normalize;

use super::common::internal;

pub fn execute_reconcile_command(
    config: &Config,
    old_path: &Utf8Path,
    new_path: &Utf8Path,
    write_to: Option<&Utf8Path>,
    dry_run: bool,
) -> Result<ExitCode, ReqTraceError> {
    let old_path = lexical_normalize(old_path);
    let new_path = lexical_normalize(new_path);

    let old_text = read_document(&old_path)?;
    let new_text = read_document(&new_path)?;

    let old = extract_tasks(&old_text, &old_path).tasks;
    let new = extract_tasks(&new_text, &new_path).tasks;

    let outcome = reconcile(
        &old,
        &new,
        ReconcileOptions {
            threshold: config.similarity_threshold,
        },
    )?;

    let annotated = annotate_document(&new_text, &outcome.tasks);

    if dry_run {
        print!("{annotated}");
    } else {
        let target = write_to.unwrap_or(new_path.as_path());
        write_atomic(target, &annotated).map_err(internal)?;
        info!(path = %target, "wrote reconciled task document");
    }

    eprintln!(
        "reconciled {} task(s): {} exact, {} by similarity",
        outcome.tasks.len(),
        outcome.exact_matches,
        outcome.similar_matches
    );
    if !outcome.unmatched.is_empty() {
        eprintln!("needs manual reconciliation:");
        for unmatched in &outcome.unmatched {
            let refs = unmatched
                .references
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            eprintln!(
                "  ✗ {} \"{}\" [{refs}]",
                unmatched.location, unmatched.description
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
