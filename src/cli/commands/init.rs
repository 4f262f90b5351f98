//! # Init Command Module / 初始化命令模块
//!
//! Creates a `Memcheck.toml` file, either from the built-in defaults or
//! through a short interactive wizard.
//!
//! 创建 `Memcheck.toml` 文件，可直接使用内置默认值，
//! 也可通过简短的交互式向导生成。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

use crate::core::config::RunnerConfig;
use crate::infra::{fs::write_creating_parents, t};

const CONFIG_HEADER: &str = "# Memcheck runner configuration\n\
# Every regular file in `fixtures_dir` is fed to `program` on stdin while\n\
# `checker` wraps it. A nonzero checker exit marks the fixture as FAILED.\n\n";

/// Executes the init command.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file without asking
/// * `non_interactive` - Write the defaults instead of prompting
/// * `language` - Language recorded in the generated file
pub fn execute(output: PathBuf, force: bool, non_interactive: bool, language: String) -> Result<()> {
    rust_i18n::set_locale(&language);

    let mut config = RunnerConfig {
        language: Some(language),
        ..RunnerConfig::default()
    };

    if non_interactive {
        if output.exists() && !force {
            println!("{}", t!("init.file_exists", path = output.display()).red());
            println!("{}", t!("init.use_force").yellow());
            return Ok(());
        }
    } else {
        let theme = ColorfulTheme::default();
        println!("\n{}", t!("init.welcome").bold().cyan());
        println!("{}\n", t!("init.description"));

        if output.exists() && !force && !confirm_overwrite(&theme)? {
            println!("{}", t!("init.aborted").yellow());
            return Ok(());
        }
        prompt_for_config(&theme, &mut config)?;
    }

    write_config(&config, &output)?;

    println!("{}", t!("init.success", path = output.display()).green());
    println!("{}", t!("init.next_steps"));
    Ok(())
}

/// Renders a configuration as the commented TOML written by `init`.
pub fn render_config(config: &RunnerConfig) -> Result<String> {
    let body = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    Ok(format!("{CONFIG_HEADER}{body}"))
}

fn write_config(config: &RunnerConfig, output: &Path) -> Result<()> {
    let content = render_config(config)?;
    write_creating_parents(output, &content)
        .with_context(|| t!("init.write_failed", path = output.display()).to_string())
}

fn confirm_overwrite(theme: &ColorfulTheme) -> Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(t!("init.confirm_overwrite").to_string())
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

fn prompt_for_config(theme: &ColorfulTheme, config: &mut RunnerConfig) -> Result<()> {
    let fixtures_dir: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_fixtures_dir").to_string())
        .default(config.fixtures_dir.display().to_string())
        .interact_text()?;
    config.fixtures_dir = PathBuf::from(fixtures_dir);

    config.program = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_program").to_string())
        .default(config.program.clone())
        .interact_text()?;

    config.checker = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_checker").to_string())
        .default(config.checker.clone())
        .interact_text()?;

    let timeout_secs: u64 = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_timeout").to_string())
        .default(0)
        .interact_text()?;
    config.timeout_secs = (timeout_secs > 0).then_some(timeout_secs);

    Ok(())
}
