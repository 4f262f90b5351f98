//! # Command Execution Module / 命令执行模块
//!
//! Builds the checker invocation for one fixture and runs it to completion
//! with its output discarded, so that only the exit status is observed.
//!
//! 为单个测试输入构建检查器调用并等待其结束，
//! 丢弃其输出，只观察退出状态。

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;

/// How long a process that died from a signal waits for `cancel` to fire. A
/// terminal Ctrl-C reaches the child's process group and our handler at about
/// the same time.
const SIGNAL_EXIT_GRACE: Duration = Duration::from_millis(50);

/// Splits a configured command line into words.
///
/// `~` and `$VAR` references are expanded first, then the result is split
/// with POSIX shell quoting rules.
pub fn parse_command_line(line: &str) -> Result<Vec<String>> {
    let expanded = shellexpand::full(line)
        .with_context(|| format!("Failed to expand command: {line}"))?
        .to_string();

    let parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse command: {}", expanded))?;

    if parts.is_empty() {
        bail!("Empty command after parsing.");
    }
    Ok(parts)
}

/// Builds `<checker...> <program...>` with `stdin` attached to the child.
///
/// An empty `checker` is an `InvalidInput` error, reported like any other
/// launch failure.
pub fn build_checker_command(
    checker: &[String],
    program: &[String],
    stdin: File,
) -> io::Result<Command> {
    let Some((executable, checker_args)) = checker.split_first() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "empty checker command",
        ));
    };

    let mut cmd = Command::new(executable);
    cmd.args(checker_args)
        .args(program)
        .stdin(Stdio::from(stdin))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    Ok(cmd)
}

/// How a checker invocation ended.
#[derive(Debug)]
pub enum Invocation {
    /// The process ran and exited on its own.
    Exited(ExitStatus),
    /// The process could not be spawned or waited on.
    Failed(io::Error),
    /// The process outlived the timeout and was killed.
    TimedOut(Duration),
    /// The run was cancelled while the process was alive; it was killed.
    Cancelled,
}

/// Spawns `cmd` and blocks until it exits, the timeout elapses or `cancel`
/// fires. A process still alive in the last two cases is killed before this
/// returns.
pub async fn run_to_completion(
    mut cmd: Command,
    timeout: Option<Duration>,
    cancel: &CancellationToken,
) -> Invocation {
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return Invocation::Failed(e),
    };

    let invocation = tokio::select! {
        biased;
        _ = cancel.cancelled() => Invocation::Cancelled,
        invocation = wait_with_timeout(&mut child, timeout) => invocation,
    };

    if matches!(invocation, Invocation::Cancelled | Invocation::TimedOut(_)) {
        if let Err(e) = child.kill().await {
            tracing::warn!(error = %e, "failed to kill checker process");
        }
    }

    match invocation {
        Invocation::Exited(status) if status.code().is_none() => {
            classify_signal_exit(status, cancel).await
        }
        other => other,
    }
}

/// Maps a process terminated by a signal to `Cancelled` if `cancel` fires
/// within `SIGNAL_EXIT_GRACE`.
pub async fn classify_signal_exit(status: ExitStatus, cancel: &CancellationToken) -> Invocation {
    let cancelled = tokio::time::timeout(SIGNAL_EXIT_GRACE, cancel.cancelled())
        .await
        .is_ok();
    if cancelled {
        tracing::debug!(?status, "checker terminated by the interrupt");
        Invocation::Cancelled
    } else {
        Invocation::Exited(status)
    }
}

async fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> Invocation {
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(result) => result,
            Err(_) => return Invocation::TimedOut(limit),
        },
        None => child.wait().await,
    };

    match result {
        Ok(status) => Invocation::Exited(status),
        Err(e) => Invocation::Failed(e),
    }
}
