// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A fake program under test: exits 1 when its stdin mentions "leak",
/// otherwise 0. Run through `sh`, so `sh` plays the role of the checker.
const FAKE_PROGRAM: &str = r#"#!/bin/sh
if grep -q leak; then
    exit 1
fi
exit 0
"#;

/// A program that never finishes within a test's patience.
const HANGING_PROGRAM: &str = r#"#!/bin/sh
exec sleep 30
"#;

/// Creates a workspace with a `tests/` fixtures directory holding `fixtures`
/// (name, contents) and a `prog.sh` fake program next to it.
pub fn setup_workspace(fixtures: &[(&str, &str)]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let fixtures_dir = temp_dir.path().join("tests");
    fs::create_dir_all(&fixtures_dir).expect("Failed to create fixtures directory");

    for (name, contents) in fixtures {
        fs::write(fixtures_dir.join(name), contents).expect("Failed to write fixture");
    }

    fs::write(temp_dir.path().join("prog.sh"), FAKE_PROGRAM).expect("Failed to write prog.sh");
    fs::write(temp_dir.path().join("hang.sh"), HANGING_PROGRAM).expect("Failed to write hang.sh");

    temp_dir
}

pub fn fixtures_dir(workspace: &TempDir) -> PathBuf {
    workspace.path().join("tests")
}

/// The `--program` value that runs the fake program.
pub fn fake_program(workspace: &TempDir) -> String {
    quoted(&workspace.path().join("prog.sh"))
}

/// The `--program` value that runs the hanging program.
pub fn hanging_program(workspace: &TempDir) -> String {
    quoted(&workspace.path().join("hang.sh"))
}

fn quoted(path: &Path) -> String {
    format!("'{}'", path.display())
}

/// Report lines of a run's stdout, sorted so directory order does not matter.
pub fn sorted_report_lines(stdout: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.starts_with("SUCCESS ") || line.starts_with("FAILED "))
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
