//! # Data Models Module / 数据模型模块
//!
//! Transient values produced by one run: the fixtures found on disk, the
//! classified outcome of each checker invocation, and the summary handed to the
//! JSON report.
//!
//! 单次运行产生的临时数据：磁盘上找到的测试输入、每次检查器调用的
//! 分类结果，以及交给 JSON 报告的汇总。

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// One input file fed to the program under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    /// The file name, as printed in report lines.
    pub name: String,
    /// Full path used to open the file as stdin.
    pub path: PathBuf,
}

/// Why a fixture was reported as `FAILED`. Every reason prints the same report
/// line; the distinction only surfaces in logs and the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The checker exited with a nonzero status. `code` is `None` when the
    /// process was terminated by a signal.
    NonZeroExit { code: Option<i32> },
    /// The checker, the program or the fixture itself could not be started or
    /// opened.
    LaunchFailed { message: String },
    /// The invocation ran longer than the configured timeout and was killed.
    Timeout { secs: u64 },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NonZeroExit { code: Some(code) } => write!(f, "exit status {code}"),
            FailureReason::NonZeroExit { code: None } => write!(f, "terminated by signal"),
            FailureReason::LaunchFailed { message } => write!(f, "launch failed: {message}"),
            FailureReason::Timeout { secs } => write!(f, "timed out after {secs}s"),
        }
    }
}

/// The classified result of running the checker against one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureOutcome {
    /// The checker exited with status 0.
    Passed { fixture: Fixture, duration: Duration },
    /// Anything else.
    Failed {
        fixture: Fixture,
        reason: FailureReason,
        duration: Duration,
    },
}

impl FixtureOutcome {
    pub fn fixture(&self) -> &Fixture {
        match self {
            FixtureOutcome::Passed { fixture, .. } => fixture,
            FixtureOutcome::Failed { fixture, .. } => fixture,
        }
    }

    pub fn name(&self) -> &str {
        &self.fixture().name
    }

    pub fn duration(&self) -> Duration {
        match self {
            FixtureOutcome::Passed { duration, .. } => *duration,
            FixtureOutcome::Failed { duration, .. } => *duration,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FixtureOutcome::Failed { .. })
    }

    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            FixtureOutcome::Passed { .. } => None,
            FixtureOutcome::Failed { reason, .. } => Some(reason),
        }
    }
}

/// Everything one call to `run_all` observed, in execution order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FixtureOutcome>,
    /// Set when the fixtures directory did not exist and nothing ran.
    pub missing_fixtures_dir: bool,
    /// Set when Ctrl-C stopped the run before every fixture was checked.
    pub interrupted: bool,
}

impl RunSummary {
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failure()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(FixtureOutcome::is_failure)
    }
}
