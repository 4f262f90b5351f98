//! # Test Execution Module / 测试执行模块
//!
//! The run loop: check that the fixtures directory exists, then feed each
//! fixture to the program under the checker, one at a time, printing a report
//! line as soon as each invocation finishes.
//!
//! 运行循环：先确认测试输入目录存在，然后逐个把测试输入交给
//! 检查器下的程序，每次调用结束后立即输出一行报告。

use anyhow::Result;
use std::fs::File;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::RunnerConfig,
        discovery::discover_fixtures,
        models::{FailureReason, Fixture, FixtureOutcome, RunSummary},
    },
    infra::{
        command::{self, Invocation},
        fs,
    },
    reporting::console,
};

/// Runs the checker against every fixture in `config.fixtures_dir`.
///
/// A missing fixtures directory prints one diagnostic line and returns an
/// empty summary with `missing_fixtures_dir` set. Otherwise each regular file
/// gets exactly one report line. Fixtures run strictly in sequence; `cancel`
/// kills the in-flight invocation and stops the loop.
pub async fn run_all(config: &RunnerConfig, cancel: &CancellationToken) -> Result<RunSummary> {
    let fixtures_dir = &config.fixtures_dir;
    if !fs::is_directory(fixtures_dir) {
        console::print_missing_fixtures_dir(fixtures_dir);
        return Ok(RunSummary {
            missing_fixtures_dir: true,
            ..RunSummary::default()
        });
    }

    let checker = config.checker_argv()?;
    let program = config.program_argv()?;
    let timeout = config.timeout();

    console::print_banner();

    let fixtures = discover_fixtures(fixtures_dir)?;
    tracing::debug!(count = fixtures.len(), dir = %fixtures_dir.display(), "discovered fixtures");

    let mut summary = RunSummary::default();
    for fixture in fixtures {
        if cancel.is_cancelled() {
            summary.interrupted = true;
            break;
        }

        match check_fixture(fixture, &checker, &program, timeout, cancel).await {
            Some(outcome) => {
                console::print_outcome(&outcome);
                summary.outcomes.push(outcome);
            }
            None => {
                summary.interrupted = true;
                break;
            }
        }
    }

    Ok(summary)
}

/// Runs the checker once with `fixture` on stdin and classifies the result.
///
/// Returns `None` only when the run was cancelled mid-invocation.
pub async fn check_fixture(
    fixture: Fixture,
    checker: &[String],
    program: &[String],
    timeout: Option<Duration>,
    cancel: &CancellationToken,
) -> Option<FixtureOutcome> {
    let start_time = Instant::now();

    let stdin = match File::open(&fixture.path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(fixture = %fixture.name, error = %e, "failed to open fixture");
            return Some(FixtureOutcome::Failed {
                fixture,
                reason: FailureReason::LaunchFailed {
                    message: e.to_string(),
                },
                duration: start_time.elapsed(),
            });
        }
    };

    tracing::debug!(fixture = %fixture.name, ?checker, ?program, "invoking checker");
    let invocation = match command::build_checker_command(checker, program, stdin) {
        Ok(cmd) => command::run_to_completion(cmd, timeout, cancel).await,
        Err(e) => Invocation::Failed(e),
    };
    let duration = start_time.elapsed();

    let reason = match invocation {
        Invocation::Exited(status) if status.success() => {
            tracing::debug!(fixture = %fixture.name, ?duration, "checker reported clean run");
            return Some(FixtureOutcome::Passed { fixture, duration });
        }
        Invocation::Exited(status) => FailureReason::NonZeroExit {
            code: status.code(),
        },
        Invocation::Failed(e) => {
            tracing::warn!(fixture = %fixture.name, error = %e, ?checker, "failed to launch checker");
            FailureReason::LaunchFailed {
                message: e.to_string(),
            }
        }
        Invocation::TimedOut(limit) => FailureReason::Timeout {
            secs: limit.as_secs(),
        },
        Invocation::Cancelled => return None,
    };

    tracing::debug!(fixture = %fixture.name, %reason, ?duration, "checker reported failure");
    Some(FixtureOutcome::Failed {
        fixture,
        reason,
        duration,
    })
}
