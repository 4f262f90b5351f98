//! # Reporting Module / 报告模块
//!
//! Console report lines for every run, plus an optional JSON report file.
//!
//! 每次运行都输出控制台报告行，另可选写入 JSON 报告文件。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{format_outcome, print_outcome};
pub use json::write_json_report;
