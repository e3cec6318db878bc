//! Property-based tests for the similarity metric and coverage arithmetic.

use camino::Utf8Path;
use proptest::prelude::*;
use reqtrace_analysis::compute_coverage;
use reqtrace_reconcile::{ReconcileOptions, normalize, reconcile, similarity};
use reqtrace_utils::types::{
    RefTarget, Requirement, ResolvedRef, SourceLocation, Task, TaskStatus,
};

fn requirement(id: &str, line: usize) -> Requirement {
    Requirement {
        id: id.to_string(),
        description: format!("{id} description"),
        location: SourceLocation::new("spec.md", line),
    }
}

fn task(description: &str, line: usize, refs: &[&str]) -> Task {
    Task {
        description: description.to_string(),
        status: TaskStatus::Pending,
        location: SourceLocation::new("tasks.md", line),
        references: refs.iter().map(|id| RefTarget::local(*id)).collect(),
    }
}

proptest! {
    #[test]
    fn similarity_is_bounded_and_symmetric(a in ".{0,80}", b in ".{0,80}") {
        let a = normalize(&a);
        let b = normalize(&b);
        let forward = similarity(&a, &b);
        let backward = similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn similarity_of_a_string_with_itself_is_one(a in ".{0,80}") {
        let a = normalize(&a);
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn normalize_is_idempotent(a in ".{0,80}") {
        let once = normalize(&a);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn coverage_percent_matches_the_formula(
        total in 0usize..40,
        covered_bits in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let requirements: Vec<Requirement> = (0..total)
            .map(|i| requirement(&format!("FR-{i:03}"), i + 1))
            .collect();
        let refs: Vec<ResolvedRef> = requirements
            .iter()
            .enumerate()
            .filter(|(i, _)| covered_bits.get(*i).copied().unwrap_or(false))
            .map(|(i, r)| ResolvedRef {
                spec: "spec.md".into(),
                id: r.id.clone(),
                task_location: SourceLocation::new("tasks.md", i + 1),
            })
            .collect();

        let report = compute_coverage(&requirements, &refs, Utf8Path::new("spec.md"));

        prop_assert_eq!(report.total_requirements, total);
        prop_assert_eq!(report.covered_requirements, refs.len());
        prop_assert_eq!(
            report.total_requirements,
            report.covered_requirements + report.uncovered.len()
        );
        let expected = if total == 0 {
            100
        } else {
            (refs.len() as f64 / total as f64 * 100.0).round() as u32
        };
        prop_assert_eq!(report.coverage_percent, expected);
    }

    #[test]
    fn self_reconciliation_is_always_exact(
        descriptions in proptest::collection::vec("[a-z]{1,12}( [a-z]{1,12}){0,5}", 1..10),
    ) {
        let tasks: Vec<Task> = descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| task(d, i + 1, &["FR-001"]))
            .collect();

        // Threshold must not matter for exact matches.
        for threshold in [0.0, 0.7, 1.0] {
            let outcome = reconcile(&tasks, &tasks, ReconcileOptions { threshold }).unwrap();
            prop_assert_eq!(outcome.exact_matches, tasks.len());
            prop_assert!(outcome.unmatched.is_empty());
            for (reconciled, original) in outcome.tasks.iter().zip(&tasks) {
                prop_assert_eq!(&reconciled.task.references, &original.references);
            }
        }
    }

    #[test]
    fn reconciliation_is_one_to_one(
        old_descriptions in proptest::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,4}", 0..8),
        new_descriptions in proptest::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,4}", 0..8),
    ) {
        let old: Vec<Task> = old_descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| task(d, i + 1, &["FR-001"]))
            .collect();
        let new: Vec<Task> = new_descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| task(d, i + 1, &[]))
            .collect();

        let outcome = reconcile(&old, &new, ReconcileOptions::default()).unwrap();

        let mut claimed: Vec<usize> = outcome
            .tasks
            .iter()
            .filter_map(|t| t.source.as_ref().map(|s| s.old_index))
            .collect();
        claimed.sort_unstable();
        let before = claimed.len();
        claimed.dedup();
        prop_assert_eq!(before, claimed.len(), "an old task was claimed twice");

        // Every annotated old task is either claimed or reported unmatched.
        let unmatched = outcome.unmatched.len();
        prop_assert_eq!(before + unmatched, old.len());
    }
}
