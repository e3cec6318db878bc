//! Cross-reference orchestrator.
//!
//! [`DocumentSet`] takes an immutable snapshot of the specification and task
//! documents at load time, then answers the four query operations as pure
//! functions over the parsed entity lists — no shared mutable state between
//! calls, no further file access. All operations are synchronous; the inputs
//! are whole small text files.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

use reqtrace_analysis::integrity::{IntegrityInput, check_integrity};
use reqtrace_analysis::{compute_coverage, resolve_refs};
use reqtrace_extraction::{extract_requirements, extract_tasks};
use reqtrace_utils::error::{InputError, ReqTraceError};
use reqtrace_utils::paths::lexical_normalize;
use reqtrace_utils::types::{
    CoverageReport, Requirement, ResolvedRef, SourceLocation, Task, ValidationIssue,
};

/// Parsed snapshot of one spec document and one task document, plus the
/// requirement declarations of any cross-referenced spec documents that
/// could be read (an unreadable cross-referenced spec simply leaves its
/// ids undeclared, which surfaces as orphaned-reference errors).
#[derive(Debug)]
pub struct DocumentSet {
    pub spec_path: Utf8PathBuf,
    pub tasks_path: Utf8PathBuf,
    /// Declarations from the primary spec followed by cross-referenced specs.
    pub requirements: Vec<Requirement>,
    pub tasks: Vec<Task>,
    pub refs: Vec<ResolvedRef>,
    /// Malformed-annotation issues found during extraction.
    pub parse_issues: Vec<ValidationIssue>,
}

impl DocumentSet {
    /// Read and parse both documents.
    ///
    /// Missing, unreadable, or non-UTF-8 input is the only failure mode;
    /// everything content-level becomes data on the returned set.
    pub fn load(spec_path: &Utf8Path, tasks_path: &Utf8Path) -> Result<Self, ReqTraceError> {
        let spec_path = lexical_normalize(spec_path);
        let tasks_path = lexical_normalize(tasks_path);

        let spec_text = read_document(&spec_path)?;
        let tasks_text = read_document(&tasks_path)?;

        let mut requirements = extract_requirements(&spec_text, &spec_path);
        let extraction = extract_tasks(&tasks_text, &tasks_path);
        let refs = resolve_refs(&extraction.tasks, &tasks_path, &spec_path);

        // Pull in declarations from cross-referenced spec documents so a
        // qualified reference can be verified against its own file.
        let mut seen: BTreeSet<&Utf8Path> = BTreeSet::new();
        for reference in &refs {
            if reference.spec != spec_path && seen.insert(reference.spec.as_path()) {
                match read_document(&reference.spec) {
                    Ok(text) => {
                        requirements.extend(extract_requirements(&text, &reference.spec));
                    }
                    Err(err) => {
                        debug!(spec = %reference.spec, %err, "cross-referenced spec not readable");
                    }
                }
            }
        }

        Ok(Self {
            spec_path,
            tasks_path,
            requirements,
            tasks: extraction.tasks,
            refs,
            parse_issues: extraction.issues,
        })
    }

    /// Load only a specification document, for queries that never touch the
    /// task list.
    pub fn load_spec_only(spec_path: &Utf8Path) -> Result<Vec<Requirement>, ReqTraceError> {
        let spec_path = lexical_normalize(spec_path);
        let text = read_document(&spec_path)?;
        Ok(extract_requirements(&text, &spec_path))
    }

    /// Coverage report for the primary spec's requirements.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        compute_coverage(&self.requirements, &self.refs, &self.spec_path)
    }

    /// Location of a requirement's declaration in the primary spec.
    #[must_use]
    pub fn locate(&self, id: &str) -> Option<&SourceLocation> {
        self.requirements
            .iter()
            .find(|r| r.location.file == self.spec_path && r.id == id)
            .map(|r| &r.location)
    }

    /// Tasks referencing the given primary-spec requirement, in file order.
    #[must_use]
    pub fn tasks_for(&self, id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| {
                self.refs.iter().any(|reference| {
                    reference.task_location == task.location
                        && reference.id == id
                        && reference.spec == self.spec_path
                })
            })
            .collect()
    }

    /// All validation issues, flat and ordered.
    #[must_use]
    pub fn validate(&self, strict: bool) -> Vec<ValidationIssue> {
        check_integrity(&IntegrityInput {
            requirements: &self.requirements,
            refs: &self.refs,
            parse_issues: &self.parse_issues,
            primary_spec: &self.spec_path,
            strict,
        })
    }
}

/// Read a whole document, mapping failures onto the input-error taxonomy
/// (exit status 2 at the CLI boundary).
pub(crate) fn read_document(path: &Utf8Path) -> Result<String, ReqTraceError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InputError::NotFound {
            path: path.to_string(),
        },
        _ => InputError::Unreadable {
            path: path.to_string(),
            reason: e.to_string(),
        },
    })?;
    String::from_utf8(bytes).map_err(|_| {
        InputError::NotText {
            path: path.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqtrace_utils::types::{IssueRule, Severity};
    use std::fs;
    use tempfile::TempDir;

    const SPEC: &str = "\
- **FR-001**: Parse input files
- **FR-002**: Report coverage
- **FR-003**: Reconcile references
";

    const TASKS: &str = "\
# Plan

- [ ] Implement parsing [FR-001]
- [x] Implement reporting [FR-002]
- [ ] Set up CI
";

    fn workspace(spec: &str, tasks: &str) -> (TempDir, Utf8PathBuf, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let spec_path = Utf8PathBuf::from_path_buf(dir.path().join("spec.md")).unwrap();
        let tasks_path = Utf8PathBuf::from_path_buf(dir.path().join("tasks.md")).unwrap();
        fs::write(&spec_path, spec).unwrap();
        fs::write(&tasks_path, tasks).unwrap();
        (dir, spec_path, tasks_path)
    }

    #[test]
    fn coverage_scenario_two_of_three() {
        let (_dir, spec, tasks) = workspace(SPEC, TASKS);
        let docs = DocumentSet::load(&spec, &tasks).unwrap();

        let report = docs.coverage();

        assert_eq!(report.total_requirements, 3);
        assert_eq!(report.covered_requirements, 2);
        assert_eq!(report.uncovered, vec!["FR-003".to_string()]);
        assert_eq!(report.coverage_percent, 67);
    }

    #[test]
    fn locate_returns_the_exact_declaration_line() {
        let (_dir, spec, tasks) = workspace(SPEC, TASKS);
        let docs = DocumentSet::load(&spec, &tasks).unwrap();

        let location = docs.locate("FR-002").unwrap();
        assert_eq!(location.line, 2);
        assert_eq!(location.file, docs.spec_path);

        assert!(docs.locate("FR-099").is_none());
    }

    #[test]
    fn tasks_for_returns_referencing_tasks_in_file_order() {
        let tasks_text = "\
- [ ] First touch [FR-001]
- [ ] Unrelated [FR-002]
- [x] Second touch [FR-001, FR-003]
";
        let (_dir, spec, tasks) = workspace(SPEC, tasks_text);
        let docs = DocumentSet::load(&spec, &tasks).unwrap();

        let hits = docs.tasks_for("FR-001");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].location.line, 1);
        assert_eq!(hits[1].location.line, 3);
    }

    #[test]
    fn validate_reports_orphans_as_errors() {
        let tasks_text = "- [ ] Ghost work [FR-099]\n";
        let (_dir, spec, tasks) = workspace(SPEC, tasks_text);
        let docs = DocumentSet::load(&spec, &tasks).unwrap();

        let issues = docs.validate(false);

        let orphans: Vec<_> = issues
            .iter()
            .filter(|i| i.rule == IssueRule::OrphanedTaskReference)
            .collect();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].severity, Severity::Error);
    }

    #[test]
    fn missing_spec_is_an_input_error() {
        let (_dir, _spec, tasks) = workspace(SPEC, TASKS);
        let err = DocumentSet::load(Utf8Path::new("does/not/exist.md"), &tasks).unwrap_err();
        assert!(matches!(
            err,
            ReqTraceError::Input(InputError::NotFound { .. })
        ));
    }

    #[test]
    fn binary_content_is_an_input_error() {
        let dir = TempDir::new().unwrap();
        let spec_path = Utf8PathBuf::from_path_buf(dir.path().join("spec.md")).unwrap();
        let tasks_path = Utf8PathBuf::from_path_buf(dir.path().join("tasks.md")).unwrap();
        fs::write(&spec_path, [0xFFu8, 0xFE, 0x00, 0x01]).unwrap();
        fs::write(&tasks_path, "- [ ] task\n").unwrap();

        let err = DocumentSet::load(&spec_path, &tasks_path).unwrap_err();
        assert!(matches!(
            err,
            ReqTraceError::Input(InputError::NotText { .. })
        ));
    }

    #[test]
    fn cross_referenced_spec_declarations_are_loaded() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        fs::create_dir_all(root.join("core")).unwrap();
        fs::write(root.join("core/spec.md"), "- **FR-010**: Core API stays stable\n").unwrap();
        fs::write(root.join("spec.md"), SPEC).unwrap();
        fs::write(
            root.join("tasks.md"),
            "- [ ] Align with core [core/spec.md#FR-010]\n",
        )
        .unwrap();

        let docs = DocumentSet::load(&root.join("spec.md"), &root.join("tasks.md")).unwrap();

        // The qualified reference verifies against the loaded declaration.
        let issues = docs.validate(false);
        assert!(
            issues
                .iter()
                .all(|i| i.rule != IssueRule::OrphanedTaskReference),
            "unexpected orphan in {issues:?}"
        );
    }

    #[test]
    fn unreadable_cross_referenced_spec_surfaces_as_orphan() {
        let (_dir, spec, tasks) = workspace(SPEC, "- [ ] Align [missing/spec.md#FR-010]\n");
        let docs = DocumentSet::load(&spec, &tasks).unwrap();

        let issues = docs.validate(false);
        assert!(
            issues
                .iter()
                .any(|i| i.rule == IssueRule::OrphanedTaskReference)
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let (_dir, spec, tasks) = workspace(SPEC, TASKS);
        let docs = DocumentSet::load(&spec, &tasks).unwrap();

        assert_eq!(docs.coverage(), docs.coverage());
        assert_eq!(docs.validate(true), docs.validate(true));
    }
}
