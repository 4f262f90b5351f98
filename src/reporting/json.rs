//! # JSON Reporting Module / JSON 报告模块
//!
//! Writes a machine-readable record of a run. The console report stays the
//! source of truth; this file adds failure reasons and timings for CI tooling.
//!
//! 写入一次运行的机器可读记录。控制台报告仍是权威结果；
//! 该文件为 CI 工具补充失败原因和耗时。

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::config::RunnerConfig;
use crate::core::models::{FailureReason, FixtureOutcome, RunSummary};
use crate::infra::fs::write_creating_parents;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub fixtures_dir: &'a Path,
    pub checker: &'a str,
    pub program: &'a str,
    pub passed: usize,
    pub failed: usize,
    pub interrupted: bool,
    pub fixtures: Vec<JsonFixture<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonFixture<'a> {
    pub name: &'a str,
    pub path: &'a PathBuf,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a FailureReason>,
    pub duration_ms: u64,
}

impl<'a> From<&'a FixtureOutcome> for JsonFixture<'a> {
    fn from(outcome: &'a FixtureOutcome) -> Self {
        let fixture = outcome.fixture();
        Self {
            name: &fixture.name,
            path: &fixture.path,
            status: if outcome.is_failure() { "failed" } else { "passed" },
            reason: outcome.reason(),
            duration_ms: u64::try_from(outcome.duration().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl<'a> JsonReport<'a> {
    pub fn new(summary: &'a RunSummary, config: &'a RunnerConfig) -> Self {
        Self {
            generated_at: Utc::now(),
            fixtures_dir: &config.fixtures_dir,
            checker: &config.checker,
            program: &config.program,
            passed: summary.passed_count(),
            failed: summary.failed_count(),
            interrupted: summary.interrupted,
            fixtures: summary.outcomes.iter().map(JsonFixture::from).collect(),
        }
    }
}

/// Serializes `summary` as pretty JSON to `output_path`.
pub fn write_json_report(
    summary: &RunSummary,
    config: &RunnerConfig,
    output_path: &Path,
) -> Result<()> {
    let report = JsonReport::new(summary, config);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?;
    write_creating_parents(output_path, &json)
}
