//! Task extraction from a checklist document.
//!
//! A checklist line optionally ends in a reference annotation:
//!
//! ```text
//! - [ ] Implement parser [FR-001]
//! - [x] Wire config [FR-002, FR-003]
//! - [ ] Align with core API [../core/spec.md#FR-010]
//! ```
//!
//! A trailing bracket group is only treated as an annotation when at least
//! one of its comma-separated tokens has reference shape; otherwise it stays
//! part of the description (`deploy [manual]` is a task about a manual
//! deploy, not a broken reference). Inside a recognized annotation, tokens
//! that do not parse produce a `malformed-reference` issue and the
//! well-formed tokens on the same line are kept.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use reqtrace_utils::types::{
    IssueRule, RefTarget, Severity, SourceLocation, Task, TaskStatus, ValidationIssue,
};
use std::sync::LazyLock;

use crate::line::{LineKind, classify};

/// Item text split into description and trailing bracket group.
static TRAILING_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\[([^\[\]]+)\]$").unwrap());

/// Loose shape that marks a token as reference-like: optional path
/// qualifier, letters-dash-digits identifier. Near-misses like `FR-1` pass
/// this and then fail the strict check, which is what turns them into
/// malformed-reference issues instead of silent prose.
static REFERENCE_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[^#]+#)?[a-z]{2,}-\d+$").unwrap());

/// The exact token grammar: `FR-NNN`, optionally preceded by a relative
/// path and `#`.
static REFERENCE_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:([^#]+)#)?(FR-\d{3})$").unwrap());

/// Result of task extraction: the tasks plus any annotation issues found
/// along the way. Extraction always returns tasks for all syntactically
/// valid lines, even when some annotations are malformed.
#[derive(Debug, Clone, Default)]
pub struct TaskExtraction {
    pub tasks: Vec<Task>,
    pub issues: Vec<ValidationIssue>,
}

/// Extract all checklist items from `text`, in file order.
#[must_use]
pub fn extract_tasks(text: &str, file: &Utf8Path) -> TaskExtraction {
    let mut extraction = TaskExtraction::default();

    for (index, line) in text.lines().enumerate() {
        let LineKind::ChecklistItem { done, text: item } = classify(line) else {
            continue;
        };
        let location = SourceLocation::new(file, index + 1);
        let (description, references) =
            split_annotation(item, &location, &mut extraction.issues);
        extraction.tasks.push(Task {
            description,
            status: if done {
                TaskStatus::Done
            } else {
                TaskStatus::Pending
            },
            location,
            references,
        });
    }

    extraction
}

/// Split a checklist item's text into description and parsed references,
/// appending a malformed-reference issue for every token that looks like a
/// reference but does not parse.
fn split_annotation(
    item: &str,
    location: &SourceLocation,
    issues: &mut Vec<ValidationIssue>,
) -> (String, Vec<RefTarget>) {
    let Some(caps) = TRAILING_ANNOTATION.captures(item) else {
        return (item.to_string(), Vec::new());
    };

    let tokens: Vec<&str> = caps
        .get(2)
        .unwrap()
        .as_str()
        .split(',')
        .map(str::trim)
        .collect();

    if !tokens.iter().any(|t| REFERENCE_LIKE.is_match(t)) {
        // An ordinary bracketed suffix, not an annotation.
        return (item.to_string(), Vec::new());
    }

    let description = caps.get(1).unwrap().as_str().to_string();
    let mut references = Vec::new();
    for token in tokens {
        match REFERENCE_STRICT.captures(token) {
            Some(ref_caps) => references.push(RefTarget {
                spec: ref_caps.get(1).map(|p| Utf8PathBuf::from(p.as_str())),
                id: ref_caps.get(2).unwrap().as_str().to_string(),
            }),
            None => issues.push(ValidationIssue::new(
                IssueRule::MalformedReference,
                Severity::Error,
                location.clone(),
                format!("reference token `{token}` does not match `[path#]FR-NNN`"),
            )),
        }
    }
    (description, references)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> TaskExtraction {
        extract_tasks(text, Utf8Path::new("tasks.md"))
    }

    #[test]
    fn extracts_status_from_checkbox_marker() {
        let out = extract("- [ ] Pending one\n- [x] Done one\n- [X] Done two\n");
        let statuses: Vec<_> = out.tasks.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            [TaskStatus::Pending, TaskStatus::Done, TaskStatus::Done]
        );
    }

    #[test]
    fn single_reference_annotation() {
        let out = extract("- [ ] Implement parser [FR-001]\n");
        let task = &out.tasks[0];
        assert_eq!(task.description, "Implement parser");
        assert_eq!(task.references, vec![RefTarget::local("FR-001")]);
        assert!(out.issues.is_empty());
    }

    #[test]
    fn multiple_references_comma_separated() {
        let out = extract("- [x] Wire config [FR-001, FR-003]\n");
        let ids: Vec<_> = out.tasks[0].references.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["FR-001", "FR-003"]);
    }

    #[test]
    fn cross_document_reference_keeps_relative_path() {
        let out = extract("- [ ] Align with core API [../core/spec.md#FR-010]\n");
        assert_eq!(
            out.tasks[0].references,
            vec![RefTarget::in_spec("../core/spec.md", "FR-010")]
        );
    }

    #[test]
    fn line_without_annotation_has_empty_reference_set() {
        let out = extract("- [ ] Set up CI pipeline\n");
        assert!(out.tasks[0].references.is_empty());
        assert_eq!(out.tasks[0].description, "Set up CI pipeline");
    }

    #[test]
    fn plain_bracketed_suffix_is_description_text() {
        let out = extract("- [ ] Deploy to staging [manual]\n");
        assert_eq!(out.tasks[0].description, "Deploy to staging [manual]");
        assert!(out.tasks[0].references.is_empty());
        assert!(out.issues.is_empty());
    }

    #[test]
    fn malformed_token_is_reported_not_swallowed() {
        let out = extract("- [ ] Implement parser [FR-1]\n");
        assert_eq!(out.tasks.len(), 1);
        assert_eq!(out.issues.len(), 1);
        assert_eq!(out.issues[0].rule, IssueRule::MalformedReference);
        assert_eq!(out.issues[0].location.line, 1);
        assert!(out.issues[0].message.contains("FR-1"));
    }

    #[test]
    fn well_formed_tokens_survive_a_malformed_sibling() {
        let out = extract("- [ ] Mixed annotation [FR-001, FR-02]\n");
        assert_eq!(out.tasks[0].references, vec![RefTarget::local("FR-001")]);
        assert_eq!(out.issues.len(), 1);
    }

    #[test]
    fn extraction_continues_after_malformed_lines() {
        let out = extract(
            "- [ ] Bad one [FR-9]\n\
             - [x] Good one [FR-002]\n",
        );
        assert_eq!(out.tasks.len(), 2);
        assert_eq!(out.tasks[1].references, vec![RefTarget::local("FR-002")]);
        assert_eq!(out.issues.len(), 1);
    }

    #[test]
    fn task_line_numbers_are_exact() {
        let out = extract("# Plan\n\n- [ ] First\n- [ ] Second\n");
        assert_eq!(out.tasks[0].location.line, 3);
        assert_eq!(out.tasks[1].location.line, 4);
    }
}
