//! Path handling for cross-document references.
//!
//! A qualified reference like `../core/spec.md#FR-010` is resolved against
//! the referencing task document's directory and then lexically normalized,
//! so that two spellings of the same target compare equal without touching
//! the filesystem.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolve `relative` against `base_dir` and lexically normalize the result.
#[must_use]
pub fn resolve_relative(base_dir: &Utf8Path, relative: &Utf8Path) -> Utf8PathBuf {
    if relative.is_absolute() {
        return lexical_normalize(relative);
    }
    lexical_normalize(&base_dir.join(relative))
}

/// Remove `.` components and fold `..` against preceding segments without
/// consulting the filesystem. Leading `..` components that cannot be folded
/// are kept.
#[must_use]
pub fn lexical_normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out: Vec<Utf8Component> = Vec::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match out.last() {
                Some(Utf8Component::Normal(_)) => {
                    out.pop();
                }
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return Utf8PathBuf::from(".");
    }
    out.iter().map(Utf8Component::as_str).collect()
}
