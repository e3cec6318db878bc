#![allow(dead_code)] // Shared across test targets; not every target uses every helper.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPEC: &str = "\
# Auth spec

- **FR-001**: Users can log in with email and password
- **FR-002**: Sessions expire after 30 minutes
- **FR-003**: Failed logins are rate limited
";

pub const TASKS: &str = "\
# Plan

- [ ] Implement login flow [FR-001]
- [x] Add session expiry [FR-002]
- [ ] Set up CI
";

/// A throwaway workspace with a spec and tasks file written into it.
pub struct Fixture {
    pub dir: TempDir,
    pub spec: PathBuf,
    pub tasks: PathBuf,
}

pub fn fixture(spec: &str, tasks: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let spec_path = dir.path().join("spec.md");
    let tasks_path = dir.path().join("tasks.md");
    fs::write(&spec_path, spec).unwrap();
    fs::write(&tasks_path, tasks).unwrap();
    Fixture {
        dir,
        spec: spec_path,
        tasks: tasks_path,
    }
}

pub fn reqtrace() -> Command {
    Command::cargo_bin("reqtrace").unwrap()
}

pub fn reqtrace_in(dir: &Path) -> Command {
    let mut cmd = reqtrace();
    cmd.current_dir(dir);
    cmd
}
