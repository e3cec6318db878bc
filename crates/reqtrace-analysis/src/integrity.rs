//! Integrity checking: duplicate declarations, orphaned references, and
//! uncovered requirements.
//!
//! The checker performs no side effects and never fails on
//! well-formed-but-invalid content — invalid content is data, returned as
//! issues for the caller to render. Only unreadable input is an error, and
//! that is handled before this layer.

use camino::Utf8Path;
use reqtrace_utils::paths::lexical_normalize;
use reqtrace_utils::types::{
    IssueRule, Requirement, ResolvedRef, Severity, ValidationIssue,
};
use std::collections::{BTreeMap, BTreeSet};

/// Inputs for one integrity pass.
///
/// `requirements` holds every known declaration — the primary spec's plus
/// any cross-referenced documents' — keyed by each requirement's own file.
/// Coverage-style checks (uncovered) apply to the primary spec only; orphan
/// checks consult the full list.
pub struct IntegrityInput<'a> {
    pub requirements: &'a [Requirement],
    pub refs: &'a [ResolvedRef],
    /// Malformed-annotation issues collected during extraction, passed
    /// through so the output is one flat, ordered list.
    pub parse_issues: &'a [ValidationIssue],
    pub primary_spec: &'a Utf8Path,
    /// Escalate uncovered requirements from WARNING to ERROR.
    pub strict: bool,
}

/// Run all integrity checks, returning one flat, ordered issue list:
/// duplicate declarations, then parse issues, then orphaned references in
/// task order, then uncovered requirements in declaration order.
#[must_use]
pub fn check_integrity(input: &IntegrityInput<'_>) -> Vec<ValidationIssue> {
    let mut issues = duplicate_requirements(input.requirements);
    issues.extend(input.parse_issues.iter().cloned());
    issues.extend(orphaned_references(input.requirements, input.refs));
    issues.extend(uncovered_requirements(
        input.requirements,
        input.refs,
        input.primary_spec,
        input.strict,
    ));
    issues
}

/// One ERROR per re-declaration of an id already declared in the same file.
#[must_use]
pub fn duplicate_requirements(requirements: &[Requirement]) -> Vec<ValidationIssue> {
    let mut first_seen: BTreeMap<(&Utf8Path, &str), usize> = BTreeMap::new();
    let mut issues = Vec::new();
    for requirement in requirements {
        let key = (requirement.location.file.as_path(), requirement.id.as_str());
        match first_seen.get(&key) {
            None => {
                first_seen.insert(key, requirement.location.line);
            }
            Some(first_line) => issues.push(ValidationIssue::new(
                IssueRule::DuplicateRequirement,
                Severity::Error,
                requirement.location.clone(),
                format!(
                    "requirement {} already declared at line {first_line}",
                    requirement.id
                ),
            )),
        }
    }
    issues
}

/// One ERROR per occurrence of a reference whose target does not exist.
/// Three tasks pointing at the same missing id produce three issues — each
/// occurrence is independently actionable.
#[must_use]
pub fn orphaned_references(
    requirements: &[Requirement],
    refs: &[ResolvedRef],
) -> Vec<ValidationIssue> {
    let declared: BTreeSet<(&Utf8Path, &str)> = requirements
        .iter()
        .map(|r| (r.location.file.as_path(), r.id.as_str()))
        .collect();

    refs.iter()
        .filter(|reference| !declared.contains(&(reference.spec.as_path(), reference.id.as_str())))
        .map(|reference| {
            ValidationIssue::new(
                IssueRule::OrphanedTaskReference,
                Severity::Error,
                reference.task_location.clone(),
                format!("reference to {} which is not declared in {}", reference.id, reference.spec),
            )
        })
        .collect()
}

/// One issue per primary-spec requirement with zero referencing tasks.
/// WARNING by default; ERROR under strict mode.
#[must_use]
pub fn uncovered_requirements(
    requirements: &[Requirement],
    refs: &[ResolvedRef],
    primary_spec: &Utf8Path,
    strict: bool,
) -> Vec<ValidationIssue> {
    let spec_key = lexical_normalize(primary_spec);
    let referenced: BTreeSet<&str> = refs
        .iter()
        .filter(|reference| reference.spec == spec_key)
        .map(|reference| reference.id.as_str())
        .collect();

    let severity = if strict { Severity::Error } else { Severity::Warning };
    let mut seen = BTreeSet::new();
    requirements
        .iter()
        .filter(|r| r.location.file == spec_key && seen.insert(r.id.as_str()))
        .filter(|r| !referenced.contains(r.id.as_str()))
        .map(|r| {
            ValidationIssue::new(
                IssueRule::UncoveredRequirement,
                severity,
                r.location.clone(),
                format!("requirement {} has no referencing task", r.id),
            )
        })
        .collect()
}
