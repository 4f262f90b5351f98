//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the per-fixture report lines. Their wording is fixed so that scripts
//! can grep for it:
//!
//! ```text
//! SUCCESS clean.txt: No memory leaks or errors found.
//! FAILED leak_test.txt: Memory leaks or errors detected.
//! ```
//!
//! Only the leading status word is colored, and only on a terminal.
//!
//! 输出每个测试输入的报告行。其措辞固定，便于脚本匹配。
//! 只有开头的状态词会着色，且仅在终端中着色。

use colored::*;
use std::io::IsTerminal;
use std::path::Path;

use crate::core::models::FixtureOutcome;
use crate::infra::t;

const SUCCESS_WORD: &str = "SUCCESS";
const FAILED_WORD: &str = "FAILED";
const SUCCESS_VERDICT: &str = "No memory leaks or errors found.";
const FAILED_VERDICT: &str = "Memory leaks or errors detected.";

/// Disables colored output when asked to, or when stdout is not a terminal.
pub fn configure_colors(no_color: bool) {
    if no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// The report line for one outcome. With `colorize`, the status word is green
/// or red unless colors were turned off by `configure_colors`.
pub fn format_outcome(outcome: &FixtureOutcome, colorize: bool) -> String {
    let (word, color, verdict) = match outcome {
        FixtureOutcome::Passed { .. } => (SUCCESS_WORD, Color::Green, SUCCESS_VERDICT),
        FixtureOutcome::Failed { .. } => (FAILED_WORD, Color::Red, FAILED_VERDICT),
    };
    let status = if colorize { word.color(color) } else { word.normal() };
    format!("{status} {}: {verdict}", outcome.name())
}

/// Prints the report line for one outcome.
pub fn print_outcome(outcome: &FixtureOutcome) {
    println!("{}", format_outcome(outcome, true));
}

/// Printed once before the first fixture runs.
pub fn print_banner() {
    println!("{}", t!("run.banner").dimmed());
}

/// The single diagnostic printed when the fixtures directory is absent.
pub fn print_missing_fixtures_dir(dir: &Path) {
    println!("{}", t!("run.folder_not_found", path = dir.display()));
}
