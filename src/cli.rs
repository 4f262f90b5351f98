// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::config::ConfigOverrides;
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli() -> Command {
    Command::new("memcheck-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about").to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config").to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("fixtures-dir")
                .long("fixtures-dir")
                .help(t!("arg_fixtures_dir").to_string())
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("program")
                .long("program")
                .help(t!("arg_program").to_string())
                .value_name("PROGRAM")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("checker")
                .long("checker")
                .help(t!("arg_checker").to_string())
                .value_name("CHECKER")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help(t!("arg_timeout").to_string())
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("fail-on-error")
                .long("fail-on-error")
                .help(t!("arg_fail_on_error").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help(t!("arg_json").to_string())
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help(t!("arg_no_color").to_string())
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about").to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive").to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force").to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output").to_string())
                        .value_name("PATH")
                        .default_value(crate::core::config::DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

/// Collects the run arguments given on the root command.
fn run_args_from(matches: &ArgMatches) -> commands::run::RunArgs {
    commands::run::RunArgs {
        config: matches.get_one::<PathBuf>("config").cloned(),
        overrides: ConfigOverrides {
            fixtures_dir: matches.get_one::<PathBuf>("fixtures-dir").cloned(),
            program: matches.get_one::<String>("program").cloned(),
            checker: matches.get_one::<String>("checker").cloned(),
            timeout_secs: matches.get_one::<u64>("timeout").copied(),
            fail_on_error: matches.get_flag("fail-on-error"),
            language: matches.get_one::<String>("lang").cloned(),
        },
        json: matches.get_one::<PathBuf>("json").cloned(),
        no_color: matches.get_flag("no-color"),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    crate::init(language.as_deref());

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let force = init_matches.get_flag("force");
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(crate::core::config::DEFAULT_CONFIG_FILE));
            let language = init_matches
                .get_one::<String>("lang")
                .cloned()
                .unwrap_or_else(|| rust_i18n::locale().to_string());

            commands::init::execute(output, force, non_interactive, language)?;
        }
        _ => {
            // No subcommand: check every fixture.
            commands::run::execute(run_args_from(&matches)).await?;
        }
    }
    Ok(())
}
