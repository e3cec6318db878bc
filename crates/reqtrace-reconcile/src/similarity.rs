//! Description normalization and similarity scoring.

use std::collections::BTreeSet;

/// Normalize a task description for matching: lowercase, punctuation
/// replaced by spaces, whitespace collapsed.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Similarity between two normalized descriptions, bounded to `[0, 1]`.
///
/// Equal strings score exactly 1.0. Otherwise the score is the mean of the
/// token-overlap coefficient (shared words over the smaller word set) and
/// the length ratio (shorter over longer). "implement parser" against
/// "implement parser module" scores ≈ 0.85: full token containment,
/// moderate length gap.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    let shared = tokens_a.intersection(&tokens_b).count();
    let overlap = shared as f64 / tokens_a.len().min(tokens_b.len()) as f64;

    let len_ratio = a.len().min(b.len()) as f64 / a.len().max(b.len()) as f64;

    (overlap + len_ratio) / 2.0
}
