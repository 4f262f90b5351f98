//! # Run Command Module / 运行命令模块
//!
//! The default command: resolve the configuration, check every fixture under
//! the memory checker and print one report line per fixture.
//!
//! 默认命令：解析配置，在内存检查器下检查每个测试输入，
//! 并为每个测试输入输出一行报告。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::{self, ConfigOverrides},
        execution::run_all,
    },
    infra::t,
    reporting::{console, json::write_json_report},
};

/// Arguments of the default command, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Explicit configuration file. When absent, `Memcheck.toml` is used if
    /// it exists.
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    /// Where to write the JSON report, if anywhere.
    pub json: Option<PathBuf>,
    pub no_color: bool,
}

/// Executes the run command with the provided arguments.
///
/// Fixture failures only make this return an error when `fail_on_error` is
/// enabled; by default the runner exits successfully however many fixtures
/// failed.
pub async fn execute(args: RunArgs) -> Result<()> {
    console::configure_colors(args.no_color);

    let config = config::resolve_config(args.config.as_deref(), args.overrides)?;
    if let Some(language) = &config.language {
        rust_i18n::set_locale(language);
    }

    let stop_token = setup_signal_handler();
    let summary = run_all(&config, &stop_token).await?;

    if summary.interrupted {
        eprintln!("{}", t!("run.interrupted").yellow());
    }

    if let Some(report_path) = &args.json {
        if !summary.missing_fixtures_dir {
            match write_json_report(&summary, &config, report_path) {
                Ok(()) => eprintln!(
                    "{}",
                    t!("run.json_report_written", path = report_path.display()).green()
                ),
                Err(e) => eprintln!("{} {:#}", t!("run.json_report_failed").red(), e),
            }
        }
    }

    if config.fail_on_error && summary.has_failures() {
        anyhow::bail!(
            "{}",
            t!("run.fixtures_failed", count = summary.failed_count())
        );
    }
    Ok(())
}

/// Sets up a signal handler for graceful shutdown.
fn setup_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => token_clone.cancel(),
            Err(e) => tracing::warn!(error = %e, "failed to listen for Ctrl-C"),
        }
    });

    token
}
