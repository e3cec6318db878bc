//! Extraction of requirements and tasks from markdown documents.
//!
//! Both extractors share one line classifier ([`line::classify`]) instead of
//! carrying independent regexes. Extraction never fails on content: lines
//! that do not match a known shape are ignored, and malformed reference
//! annotations become issues in the extraction result while the rest of the
//! file is still processed.

pub mod line;
pub mod requirements;
pub mod tasks;

pub use line::{ChecklistParts, LineKind, checklist_parts, classify};
pub use requirements::extract_requirements;
pub use tasks::{TaskExtraction, extract_tasks};
