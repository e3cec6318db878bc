//! Traceability rules as plug-ins for a host validation pipeline.
//!
//! A host validator sequences rules from several subsystems; the two rules
//! this crate contributes are tagged with the `traceability` category so
//! they can run alongside unrelated structural rules. Rules return
//! structured issues instead of panicking, and a rule that cannot be
//! evaluated reports that fact in its [`RuleReport`] — it never aborts its
//! siblings and is never silently skipped.

use crate::integrity;
use camino::Utf8Path;
use reqtrace_utils::types::{Requirement, ResolvedRef, ValidationIssue};
use thiserror::Error;

/// Category tag under which these rules register with a host validator.
pub const TRACEABILITY_CATEGORY: &str = "traceability";

/// Shared inputs for rule evaluation.
pub struct RuleContext<'a> {
    pub requirements: &'a [Requirement],
    pub refs: &'a [ResolvedRef],
    pub primary_spec: &'a Utf8Path,
    pub strict: bool,
}

/// A rule that could not be evaluated. This is a reported outcome, not a
/// control-flow escape hatch.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("rule `{rule}` could not be evaluated: {reason}")]
    Evaluation { rule: &'static str, reason: String },
}

/// One pluggable validation rule.
pub trait TraceabilityRule {
    fn id(&self) -> &'static str;

    fn category(&self) -> &'static str {
        TRACEABILITY_CATEGORY
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<ValidationIssue>, RuleError>;
}

/// `orphaned-task-reference`: every reference occurrence whose target
/// identifier does not exist is an ERROR.
pub struct OrphanedReferenceRule;

impl TraceabilityRule for OrphanedReferenceRule {
    fn id(&self) -> &'static str {
        "orphaned-task-reference"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<ValidationIssue>, RuleError> {
        Ok(integrity::orphaned_references(ctx.requirements, ctx.refs))
    }
}

/// `uncovered-requirement`: requirements with zero referencing tasks are
/// WARNING by default, ERROR under strict mode.
pub struct UncoveredRequirementRule;

impl TraceabilityRule for UncoveredRequirementRule {
    fn id(&self) -> &'static str {
        "uncovered-requirement"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<ValidationIssue>, RuleError> {
        Ok(integrity::uncovered_requirements(
            ctx.requirements,
            ctx.refs,
            ctx.primary_spec,
            ctx.strict,
        ))
    }
}

/// The rules this subsystem contributes to the host pipeline.
#[must_use]
pub fn registry() -> Vec<Box<dyn TraceabilityRule>> {
    vec![Box::new(OrphanedReferenceRule), Box::new(UncoveredRequirementRule)]
}

/// Outcome of evaluating one rule.
#[derive(Debug)]
pub struct RuleReport {
    pub rule: &'static str,
    pub category: &'static str,
    pub issues: Vec<ValidationIssue>,
    /// Present when the rule could not be evaluated. Visible output, not a
    /// swallowed exception.
    pub error: Option<String>,
}

/// Evaluate every rule, collecting a report per rule. A failing rule yields
/// a report with `error` set; the remaining rules still run.
#[must_use]
pub fn run_rules(
    rules: &[Box<dyn TraceabilityRule>],
    ctx: &RuleContext<'_>,
) -> Vec<RuleReport> {
    rules
        .iter()
        .map(|rule| match rule.evaluate(ctx) {
            Ok(issues) => RuleReport {
                rule: rule.id(),
                category: rule.category(),
                issues,
                error: None,
            },
            Err(err) => RuleReport {
                rule: rule.id(),
                category: rule.category(),
                issues: Vec::new(),
                error: Some(err.to_string()),
            },
        })
        .collect()
}
