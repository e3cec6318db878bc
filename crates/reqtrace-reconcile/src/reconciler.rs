//! One-to-one matching of new tasks against old tasks.

use reqtrace_utils::error::ReconcileError;
use reqtrace_utils::types::{RefTarget, SourceLocation, Task};

use crate::similarity::{normalize, similarity};

/// Default similarity threshold. Deliberately a tunable parameter rather
/// than a constant baked into the algorithm; callers can override it per
/// invocation.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Reconciliation parameters.
#[derive(Debug, Clone, Copy)]
pub struct ReconcileOptions {
    /// Minimum similarity score for a non-exact match, in `[0, 1]`.
    pub threshold: f64,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Where a reconciled task's references came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSource {
    /// Index of the matched task in the old list.
    pub old_index: usize,
    pub old_location: SourceLocation,
    pub score: f64,
    pub exact: bool,
}

/// One new task with its reconciled references.
#[derive(Debug, Clone)]
pub struct ReconciledTask {
    pub task: Task,
    pub source: Option<MatchSource>,
}

/// An old task whose references were claimed by no new task. Surfaced for
/// manual reconciliation, never silently discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedReference {
    pub description: String,
    pub location: SourceLocation,
    pub references: Vec<RefTarget>,
}

/// Result of reconciling an old task list against a regenerated one.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// One entry per new task, in original order.
    pub tasks: Vec<ReconciledTask>,
    pub unmatched: Vec<UnmatchedReference>,
    pub exact_matches: usize,
    pub similar_matches: usize,
}

/// Match every new task against at most one old task and carry the old
/// references over.
///
/// Exact matches (normalized descriptions identical) are claimed first and
/// win regardless of threshold. Remaining new tasks then take the
/// highest-scoring unclaimed old task at or above the threshold; on a tie
/// the earliest old task wins, keeping the mapping reproducible across
/// runs. Old tasks with references that no new task claims are returned in
/// `unmatched`.
pub fn reconcile(
    old: &[Task],
    new: &[Task],
    options: ReconcileOptions,
) -> Result<ReconcileOutcome, ReconcileError> {
    if !options.threshold.is_finite() || !(0.0..=1.0).contains(&options.threshold) {
        return Err(ReconcileError::ThresholdOutOfRange {
            value: options.threshold,
        });
    }

    let old_norms: Vec<String> = old.iter().map(|t| normalize(&t.description)).collect();
    let new_norms: Vec<String> = new.iter().map(|t| normalize(&t.description)).collect();

    let mut claimed = vec![false; old.len()];
    let mut assignment: Vec<Option<MatchSource>> = vec![None; new.len()];

    // Exact matches first; each old task serves at most one new task.
    for (i, new_norm) in new_norms.iter().enumerate() {
        let hit = old_norms
            .iter()
            .enumerate()
            .find(|(j, old_norm)| !claimed[*j] && *old_norm == new_norm);
        if let Some((j, _)) = hit {
            claimed[j] = true;
            assignment[i] = Some(MatchSource {
                old_index: j,
                old_location: old[j].location.clone(),
                score: 1.0,
                exact: true,
            });
        }
    }

    // Similarity matches for the rest, earliest old task winning ties.
    for (i, new_norm) in new_norms.iter().enumerate() {
        if assignment[i].is_some() {
            continue;
        }
        let mut best: Option<(usize, f64)> = None;
        for (j, old_norm) in old_norms.iter().enumerate() {
            if claimed[j] {
                continue;
            }
            let score = similarity(new_norm, old_norm);
            if score >= options.threshold && best.is_none_or(|(_, s)| score > s) {
                best = Some((j, score));
            }
        }
        if let Some((j, score)) = best {
            claimed[j] = true;
            assignment[i] = Some(MatchSource {
                old_index: j,
                old_location: old[j].location.clone(),
                score,
                exact: false,
            });
        }
    }

    let mut exact_matches = 0;
    let mut similar_matches = 0;
    let tasks = new
        .iter()
        .zip(assignment)
        .map(|(task, source)| {
            let mut task = task.clone();
            if let Some(src) = &source {
                if src.exact {
                    exact_matches += 1;
                } else {
                    similar_matches += 1;
                }
                task.references = old[src.old_index].references.clone();
            }
            ReconciledTask { task, source }
        })
        .collect();

    let unmatched = old
        .iter()
        .enumerate()
        .filter(|(j, task)| !claimed[*j] && !task.references.is_empty())
        .map(|(_, task)| UnmatchedReference {
            description: task.description.clone(),
            location: task.location.clone(),
            references: task.references.clone(),
        })
        .collect();

    Ok(ReconcileOutcome {
        tasks,
        unmatched,
        exact_matches,
        similar_matches,
    })
}
