//! Reference path resolution.
//!
//! Task annotations carry either a bare requirement id (targeting the
//! sibling spec) or a path-qualified token (targeting another specification
//! document, relative to the task document's directory). Resolution turns
//! both into fully-qualified `(spec, id)` keys before coverage or integrity
//! run.

use camino::Utf8Path;
use reqtrace_utils::paths::{lexical_normalize, resolve_relative};
use reqtrace_utils::types::{ResolvedRef, Task};

/// Resolve every reference of every task against `tasks_path`'s directory,
/// defaulting unqualified tokens to `spec_path`. Order follows task order,
/// then annotation order within a task.
#[must_use]
pub fn resolve_refs(tasks: &[Task], tasks_path: &Utf8Path, spec_path: &Utf8Path) -> Vec<ResolvedRef> {
    let default_spec = lexical_normalize(spec_path);
    let task_dir = tasks_path.parent().unwrap_or_else(|| Utf8Path::new("."));

    let mut resolved = Vec::new();
    for task in tasks {
        for reference in &task.references {
            let spec = match &reference.spec {
                Some(relative) => resolve_relative(task_dir, relative),
                None => default_spec.clone(),
            };
            resolved.push(ResolvedRef {
                spec,
                id: reference.id.clone(),
                task_location: task.location.clone(),
            });
        }
    }
    resolved
}
