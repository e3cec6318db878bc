//! Requirement extraction from a specification document.

use camino::Utf8Path;
use reqtrace_utils::types::{Requirement, SourceLocation};

use crate::line::{LineKind, classify};

/// Extract all requirement declarations from `text`, in declaration order.
///
/// Unrecognized lines are ignored, not errors. Duplicate ids are returned
/// as-is — the integrity checker reports the violation; merging or dropping
/// either occurrence here would hide it.
#[must_use]
pub fn extract_requirements(text: &str, file: &Utf8Path) -> Vec<Requirement> {
    let mut requirements = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let LineKind::Declaration { id, description } = classify(line) {
            requirements.push(Requirement {
                id: id.to_string(),
                description: description.to_string(),
                location: SourceLocation::new(file, index + 1),
            });
        }
    }
    requirements
}
