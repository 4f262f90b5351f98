//! # Runner Configuration Module / 运行器配置模块
//!
//! Defines `RunnerConfig`, the record holding everything the run loop needs:
//! where the fixtures live, which program to feed them to and which checker to
//! wrap it in. Values come from built-in defaults, an optional `Memcheck.toml`
//! file and command-line overrides, in that order of precedence.
//!
//! 定义 `RunnerConfig`，即运行循环所需的全部设置：测试输入所在位置、
//! 被测程序以及包裹它的检查器。取值依次来自内置默认值、可选的
//! `Memcheck.toml` 文件和命令行参数，后者优先。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infra::{command, t};

/// The configuration file looked up in the working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_FILE: &str = "Memcheck.toml";

/// Default fixtures directory, relative to the working directory.
pub const DEFAULT_FIXTURES_DIR: &str = "tests";

/// Default program under test, a sibling executable named `shell`.
pub const DEFAULT_PROGRAM: &str = "./shell";

/// Default checker command. `--error-exitcode=1` makes valgrind's exit status
/// reflect detected errors, and `--leak-check=full` counts definite and
/// possible leaks as errors.
pub const DEFAULT_CHECKER: &str = "valgrind --leak-check=full --error-exitcode=1";

/// Everything a run needs, loaded from TOML and adjusted by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Directory whose regular files are the fixtures.
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: PathBuf,

    /// Command line of the program under test. Split into words with shell
    /// quoting rules after `~` and `$VAR` expansion.
    #[serde(default = "default_program")]
    pub program: String,

    /// Command line of the memory checker, prepended to the program's.
    #[serde(default = "default_checker")]
    pub checker: String,

    /// Optional per-fixture timeout in seconds. `0` means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Exit with a nonzero status when at least one fixture failed.
    #[serde(default)]
    pub fail_on_error: bool,

    /// Language of auxiliary messages (e.g. "en", "zh-CN"). When unset, the
    /// language picked from the system locale at startup is kept. The report
    /// lines themselves are never translated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURES_DIR)
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_checker() -> String {
    DEFAULT_CHECKER.to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: default_fixtures_dir(),
            program: default_program(),
            checker: default_checker(),
            timeout_secs: None,
            fail_on_error: false,
            language: None,
        }
    }
}

impl RunnerConfig {
    /// The per-fixture timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// The checker command line split into program and arguments.
    pub fn checker_argv(&self) -> Result<Vec<String>> {
        command::parse_command_line(&self.checker)
            .with_context(|| {
                t!("config.invalid_command", field = "checker", value = &self.checker).to_string()
            })
    }

    /// The program-under-test command line split into program and arguments.
    pub fn program_argv(&self) -> Result<Vec<String>> {
        command::parse_command_line(&self.program)
            .with_context(|| {
                t!("config.invalid_command", field = "program", value = &self.program).to_string()
            })
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(fixtures_dir) = overrides.fixtures_dir {
            self.fixtures_dir = fixtures_dir;
        }
        if let Some(program) = overrides.program {
            self.program = program;
        }
        if let Some(checker) = overrides.checker {
            self.checker = checker;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }
        if overrides.fail_on_error {
            self.fail_on_error = true;
        }
        if let Some(language) = overrides.language {
            self.language = Some(language);
        }
    }
}

/// Values given on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub fixtures_dir: Option<PathBuf>,
    pub program: Option<String>,
    pub checker: Option<String>,
    pub timeout_secs: Option<u64>,
    pub fail_on_error: bool,
    pub language: Option<String>,
}

/// Reads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<RunnerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    toml::from_str(&content)
        .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
}

/// Builds the effective configuration.
///
/// An explicit `config_path` must exist. Without one, `Memcheck.toml` in the
/// working directory is used when present and the built-in defaults otherwise.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<RunnerConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_config(default_path)?
            } else {
                RunnerConfig::default()
            }
        }
    };
    config.apply(overrides);
    tracing::debug!(?config, "resolved runner configuration");
    Ok(config)
}
