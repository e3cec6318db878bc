//! Coverage calculation and integrity checking over extracted entities.
//!
//! Inputs arrive with path resolution already applied ([`resolve::resolve_refs`]),
//! so every reference is keyed by a fully-qualified `(spec, id)` pair. All
//! functions here are pure and deterministic: no randomness, no ordering
//! dependency beyond the input's own declaration order.

pub mod coverage;
pub mod integrity;
pub mod resolve;
pub mod rules;

pub use coverage::compute_coverage;
pub use integrity::{IntegrityInput, check_integrity};
pub use resolve::resolve_refs;
pub use rules::{
    OrphanedReferenceRule, RuleContext, RuleError, RuleReport, TraceabilityRule,
    UncoveredRequirementRule, registry, run_rules, TRACEABILITY_CATEGORY,
};
