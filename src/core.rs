//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the runner: the configuration
//! record, fixture discovery, outcome models and the sequential run loop.
//!
//! 此模块包含运行器的核心功能：配置记录、测试输入发现、
//! 结果模型以及顺序执行的运行循环。

pub mod config;
pub mod discovery;
pub mod execution;
pub mod models;

// Re-exports
pub use config::RunnerConfig;
pub use execution::run_all;
pub use models::{FixtureOutcome, RunSummary};
