//! # Commands Module / 命令模块
//!
//! Implementations of the CLI entry points: the default fixture run and the
//! `init` configuration wizard.
//!
//! CLI 入口的实现：默认的测试输入运行，以及 `init` 配置向导。

pub mod init;
pub mod run;
