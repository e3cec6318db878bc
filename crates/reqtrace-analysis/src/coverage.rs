//! Coverage calculation.

use camino::Utf8Path;
use reqtrace_utils::paths::lexical_normalize;
use reqtrace_utils::types::{CoverageReport, Requirement, ResolvedRef};
use std::collections::{BTreeMap, BTreeSet};

/// Compute the coverage report for the requirements of `spec_path`.
///
/// A requirement is covered iff at least one distinct task references it
/// (a task listing the same id twice still counts once). When the same id is
/// declared twice, only the first declaration counts toward the totals; the
/// re-declaration is an integrity error, not a second requirement.
/// `coverage_percent` rounds to the nearest integer and is 100 for an empty
/// requirement set.
#[must_use]
pub fn compute_coverage(
    requirements: &[Requirement],
    refs: &[ResolvedRef],
    spec_path: &Utf8Path,
) -> CoverageReport {
    let spec_key = lexical_normalize(spec_path);

    // Distinct referencing tasks per requirement id, for this spec only.
    let mut referencing_tasks: BTreeMap<&str, BTreeSet<(&Utf8Path, usize)>> = BTreeMap::new();
    for reference in refs {
        if reference.spec == spec_key {
            referencing_tasks
                .entry(reference.id.as_str())
                .or_default()
                .insert((
                    reference.task_location.file.as_path(),
                    reference.task_location.line,
                ));
        }
    }

    let mut seen = BTreeSet::new();
    let mut total = 0usize;
    let mut covered = 0usize;
    let mut uncovered = Vec::new();
    for requirement in requirements {
        if requirement.location.file != spec_key || !seen.insert(requirement.id.as_str()) {
            continue;
        }
        total += 1;
        if referencing_tasks.contains_key(requirement.id.as_str()) {
            covered += 1;
        } else {
            uncovered.push(requirement.id.clone());
        }
    }

    let coverage_percent = if total == 0 {
        100
    } else {
        (covered as f64 / total as f64 * 100.0).round() as u32
    };

    CoverageReport {
        total_requirements: total,
        covered_requirements: covered,
        uncovered,
        coverage_percent,
    }
}
