//! Core entity model for requirement/task traceability.
//!
//! Requirements and tasks are read-only projections of their source files.
//! Everything here derives `Serialize` so reports can be emitted as canonical
//! JSON; field names on [`CoverageReport`] are part of the JSON contract.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a source document. Lines are 1-based and exact, because
/// `locate` output is consumed by editors as `file:line` jump targets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: Utf8PathBuf,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<Utf8PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A declared requirement (`- **FR-001**: ...` in a specification document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Stable identifier, `FR-NNN` with three zero-padded digits.
    pub id: String,
    /// The requirement text on its defining line.
    pub description: String,
    /// The only valid place this requirement may be defined.
    pub location: SourceLocation,
}

/// Checkbox state of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Pending,
    Done,
}

/// A reference token from a task's trailing annotation.
///
/// `spec` is the optional relative path qualifier from a
/// `path/to/spec.md#FR-001` token; `None` means the sibling specification in
/// the task document's own directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<Utf8PathBuf>,
    pub id: String,
}

impl RefTarget {
    pub fn local(id: impl Into<String>) -> Self {
        Self {
            spec: None,
            id: id.into(),
        }
    }

    pub fn in_spec(spec: impl Into<Utf8PathBuf>, id: impl Into<String>) -> Self {
        Self {
            spec: Some(spec.into()),
            id: id.into(),
        }
    }
}

impl fmt::Display for RefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            Some(path) => write!(f, "{path}#{}", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A checklist item from a task document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Item text, excluding the checkbox marker and any reference annotation.
    pub description: String,
    pub status: TaskStatus,
    pub location: SourceLocation,
    /// Ordered reference set; empty for infrastructure/setup tasks.
    pub references: Vec<RefTarget>,
}

/// A reference with path resolution applied: keyed by the fully-qualified
/// `(spec, id)` pair, carrying the referencing task's location so orphan
/// issues and distinct-task counting stay per-occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRef {
    pub spec: Utf8PathBuf,
    pub id: String,
    pub task_location: SourceLocation,
}

impl ResolvedRef {
    /// Whether this reference targets the given requirement declaration.
    #[must_use]
    pub fn targets(&self, spec: &Utf8Path, id: &str) -> bool {
        self.spec == spec && self.id == id
    }
}

/// Derived coverage summary. Field names and shapes are the JSON contract:
///
/// ```json
/// {
///   "total_requirements": 3,
///   "covered_requirements": 2,
///   "uncovered": ["FR-003"],
///   "coverage_percent": 67
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub total_requirements: usize,
    pub covered_requirements: usize,
    /// Requirement ids with zero referencing tasks, in declaration order.
    pub uncovered: Vec<String>,
    /// `100 * covered / total`, rounded to nearest; 100 when total is 0.
    pub coverage_percent: u32,
}

/// Issue severity. Orphaned references are always errors; uncovered
/// requirements are warnings unless strict mode escalates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// The rule that produced a [`ValidationIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueRule {
    /// A task reference whose target identifier does not exist.
    OrphanedTaskReference,
    /// A requirement with zero referencing tasks.
    UncoveredRequirement,
    /// The same requirement id declared twice in one document.
    DuplicateRequirement,
    /// An annotation token that does not parse as a reference.
    MalformedReference,
}

impl IssueRule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrphanedTaskReference => "orphaned-task-reference",
            Self::UncoveredRequirement => "uncovered-requirement",
            Self::DuplicateRequirement => "duplicate-requirement",
            Self::MalformedReference => "malformed-reference",
        }
    }
}

impl fmt::Display for IssueRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding from validation. Invalid content is data, not an exception:
/// issues are returned in result structures for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub rule: IssueRule,
    pub severity: Severity,
    pub location: SourceLocation,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        rule: IssueRule,
        severity: Severity,
        location: SourceLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.rule, self.location, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_location_display_is_editor_friendly() {
        let loc = SourceLocation::new("specs/auth/spec.md", 12);
        assert_eq!(loc.to_string(), "specs/auth/spec.md:12");
    }

    #[test]
    fn ref_target_display_includes_path_qualifier() {
        assert_eq!(RefTarget::local("FR-001").to_string(), "FR-001");
        assert_eq!(
            RefTarget::in_spec("../core/spec.md", "FR-010").to_string(),
            "../core/spec.md#FR-010"
        );
    }

    #[test]
    fn coverage_report_json_field_names() {
        let report = CoverageReport {
            total_requirements: 3,
            covered_requirements: 2,
            uncovered: vec!["FR-003".to_string()],
            coverage_percent: 67,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_requirements"], 3);
        assert_eq!(value["covered_requirements"], 2);
        assert_eq!(value["uncovered"][0], "FR-003");
        assert_eq!(value["coverage_percent"], 67);
    }

    #[test]
    fn issue_rule_serializes_kebab_case() {
        let json = serde_json::to_string(&IssueRule::OrphanedTaskReference).unwrap();
        assert_eq!(json, r#""orphaned-task-reference""#);
        let json = serde_json::to_string(&IssueRule::UncoveredRequirement).unwrap();
        assert_eq!(json, r#""uncovered-requirement""#);
    }

    #[test]
    fn severity_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), r#""ERROR""#);
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            r#""WARNING""#
        );
    }
}
