//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for `RunnerConfig`: defaults, TOML loading, CLI overrides and command
//! line splitting.

use memcheck_runner::config::{
    ConfigOverrides, DEFAULT_CHECKER, RunnerConfig, load_config, resolve_config,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(test)]
mod defaults_tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_literals() {
        let config = RunnerConfig::default();

        assert_eq!(config.fixtures_dir, PathBuf::from("tests"));
        assert_eq!(config.program, "./shell");
        assert_eq!(config.checker, DEFAULT_CHECKER);
        assert_eq!(config.timeout_secs, None);
        assert!(!config.fail_on_error);
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_default_checker_argv() {
        let argv = RunnerConfig::default().checker_argv().unwrap();
        assert_eq!(argv, vec!["valgrind", "--leak-check=full", "--error-exitcode=1"]);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = RunnerConfig {
            timeout_secs: Some(0),
            ..RunnerConfig::default()
        };
        assert_eq!(config.timeout(), None);

        let config = RunnerConfig {
            timeout_secs: Some(5),
            ..RunnerConfig::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}

#[cfg(test)]
mod toml_tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: RunnerConfig = toml::from_str("").unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let toml_str = r#"
            fixtures_dir = "inputs"
            timeout_secs = 30
        "#;

        let config: RunnerConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.fixtures_dir, PathBuf::from("inputs"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.program, "./shell");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<RunnerConfig, _> = toml::from_str("fixture_dir = \"typo\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_reports_parse_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "checker = [unterminated").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }

    #[test]
    fn test_resolve_explicit_missing_file_fails() {
        let result = resolve_config(
            Some(Path::new("/definitely/not/here/Memcheck.toml")),
            ConfigOverrides::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_explicit_file_with_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Memcheck.toml");
        fs::write(&path, "program = \"./a.out\"\nchecker = \"valgrind\"\n").unwrap();

        let config = resolve_config(
            Some(path.as_path()),
            ConfigOverrides {
                checker: Some("drmemory --".to_string()),
                fail_on_error: true,
                ..ConfigOverrides::default()
            },
        )
        .unwrap();

        assert_eq!(config.program, "./a.out");
        assert_eq!(config.checker, "drmemory --");
        assert!(config.fail_on_error);
    }
}

#[cfg(test)]
mod override_tests {
    use super::*;

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut config = RunnerConfig::default();
        config.apply(ConfigOverrides::default());
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_fail_on_error_flag_cannot_disable_config_value() {
        let mut config = RunnerConfig {
            fail_on_error: true,
            ..RunnerConfig::default()
        };
        config.apply(ConfigOverrides::default());
        assert!(config.fail_on_error);
    }

    #[test]
    fn test_every_override_applies() {
        let mut config = RunnerConfig::default();
        config.apply(ConfigOverrides {
            fixtures_dir: Some(PathBuf::from("cases")),
            program: Some("./my shell".to_string()),
            checker: Some("valgrind -q".to_string()),
            timeout_secs: Some(9),
            fail_on_error: true,
            language: Some("zh-CN".to_string()),
        });

        assert_eq!(config.fixtures_dir, PathBuf::from("cases"));
        assert_eq!(config.program, "./my shell");
        assert_eq!(config.checker, "valgrind -q");
        assert_eq!(config.timeout_secs, Some(9));
        assert!(config.fail_on_error);
        assert_eq!(config.language.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn test_quoted_program_path_stays_one_word() {
        let config = RunnerConfig {
            program: "'./build dir/shell' --quiet".to_string(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            config.program_argv().unwrap(),
            vec!["./build dir/shell", "--quiet"]
        );
    }

    #[test]
    fn test_blank_checker_is_rejected() {
        let config = RunnerConfig {
            checker: "   ".to_string(),
            ..RunnerConfig::default()
        };
        assert!(config.checker_argv().is_err());
    }
}
