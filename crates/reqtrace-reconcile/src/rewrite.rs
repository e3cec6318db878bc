//! Rewriting a regenerated task document with reconciled annotations.
//!
//! The only mutation this subsystem ever performs on a task document is
//! reinserting reference annotations. Task text, status markers,
//! indentation, headings, and prose all pass through untouched.

use reqtrace_extraction::line::checklist_parts;

use crate::reconciler::ReconciledTask;

/// Produce the annotated version of `new_text`.
///
/// Checklist lines are visited in order, pairing them with `tasks` (which
/// the reconciler produced from the same document, so the order agrees).
/// A line whose reconciled task carries references is rebuilt as
/// `prefix + description + " [refs]"`; every other line is passed through
/// byte-for-byte.
#[must_use]
pub fn annotate_document(new_text: &str, tasks: &[ReconciledTask]) -> String {
    let mut out = String::with_capacity(new_text.len());
    let mut next_task = 0usize;

    for line in new_text.lines() {
        match checklist_parts(line) {
            Some(parts) if next_task < tasks.len() => {
                let reconciled = &tasks[next_task];
                next_task += 1;
                if reconciled.task.references.is_empty() {
                    out.push_str(line);
                } else {
                    let annotation = reconciled
                        .task
                        .references
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    out.push_str(parts.prefix);
                    out.push_str(&reconciled.task.description);
                    out.push_str(" [");
                    out.push_str(&annotation);
                    out.push(']');
                }
            }
            _ => out.push_str(line),
        }
        out.push('\n');
    }

    if !new_text.ends_with('\n') && out.ends_with('\n') {
        out.pop();
    }
    out
}
