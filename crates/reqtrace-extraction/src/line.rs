//! Line classification shared by both extractors.
//!
//! Every line of a source document falls into exactly one of three shapes:
//! a requirement declaration, a checklist item, or anything else. Keeping
//! the classification in one place means the requirement and task extractors
//! cannot drift apart on what counts as which.

use regex::Regex;
use std::sync::LazyLock;

/// `- **FR-001**: description` — a bulleted line introducing a bold
/// requirement token followed by a colon and non-empty text.
static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\*\*(FR-\d{3})\*\*\s*:\s*(.*\S)\s*$").unwrap());

/// `- [ ] text` / `- [x] text` — a checklist item with a checkbox marker.
static CHECKLIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\[([ xX])\]\s+(.*?)\s*$").unwrap());

/// The shape of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A requirement declaration with its identifier and description text.
    Declaration { id: &'a str, description: &'a str },
    /// A checklist item; `text` still includes any trailing annotation.
    ChecklistItem { done: bool, text: &'a str },
    /// Anything else. Never an error.
    Other,
}

/// A checklist line split into its syntactic pieces. `prefix` is the
/// indentation, bullet, and checkbox marker up to the item text, so a
/// rewriter can rebuild the line without re-deriving the marker grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistParts<'a> {
    pub prefix: &'a str,
    pub done: bool,
    pub text: &'a str,
}

/// Split a checklist line into prefix, checkbox state, and item text.
#[must_use]
pub fn checklist_parts(line: &str) -> Option<ChecklistParts<'_>> {
    let caps = CHECKLIST_ITEM.captures(line)?;
    let marker = caps.get(1).unwrap().as_str();
    let text = caps.get(2).unwrap();
    Some(ChecklistParts {
        prefix: &line[..text.start()],
        done: marker.eq_ignore_ascii_case("x"),
        text: text.as_str(),
    })
}

/// Classify a single line.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = DECLARATION.captures(line) {
        return LineKind::Declaration {
            id: caps.get(1).unwrap().as_str(),
            description: caps.get(2).unwrap().as_str(),
        };
    }
    if let Some(parts) = checklist_parts(line) {
        return LineKind::ChecklistItem {
            done: parts.done,
            text: parts.text,
        };
    }
    LineKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_declaration() {
        let kind = classify("- **FR-001**: The parser accepts UTF-8 input");
        assert_eq!(
            kind,
            LineKind::Declaration {
                id: "FR-001",
                description: "The parser accepts UTF-8 input"
            }
        );
    }

    #[test]
    fn classifies_star_bullet_declaration() {
        let kind = classify("* **FR-042**: Star bullets work too");
        assert!(matches!(kind, LineKind::Declaration { id: "FR-042", .. }));
    }

    #[test]
    fn declaration_requires_three_digit_id() {
        assert_eq!(classify("- **FR-1**: too short"), LineKind::Other);
        assert_eq!(classify("- **FR-0001**: too long"), LineKind::Other);
    }

    #[test]
    fn declaration_requires_bold_token() {
        assert_eq!(classify("- FR-001: not bold"), LineKind::Other);
    }

    #[test]
    fn classifies_pending_checklist_item() {
        let kind = classify("- [ ] Implement parser [FR-001]");
        assert_eq!(
            kind,
            LineKind::ChecklistItem {
                done: false,
                text: "Implement parser [FR-001]"
            }
        );
    }

    #[test]
    fn classifies_done_checklist_item_both_cases() {
        assert!(matches!(
            classify("- [x] Lowercase done"),
            LineKind::ChecklistItem { done: true, .. }
        ));
        assert!(matches!(
            classify("- [X] Uppercase done"),
            LineKind::ChecklistItem { done: true, .. }
        ));
    }

    #[test]
    fn indented_items_are_recognized() {
        assert!(matches!(
            classify("  - [ ] Nested subtask"),
            LineKind::ChecklistItem { done: false, .. }
        ));
    }

    #[test]
    fn checklist_parts_preserve_the_exact_prefix() {
        let parts = checklist_parts("  - [x] Ship it").unwrap();
        assert_eq!(parts.prefix, "  - [x] ");
        assert!(parts.done);
        assert_eq!(parts.text, "Ship it");
        assert_eq!(format!("{}{}", parts.prefix, parts.text), "  - [x] Ship it");
    }

    #[test]
    fn prose_and_headings_are_other() {
        assert_eq!(classify("# Tasks"), LineKind::Other);
        assert_eq!(classify("Some prose about the plan."), LineKind::Other);
        assert_eq!(classify(""), LineKind::Other);
    }
}
