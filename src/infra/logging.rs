//! # Logging Module / 日志模块
//!
//! Developer diagnostics via `tracing`.
//!
//! Events go to stderr so stdout carries nothing but the report. Verbosity is
//! read from `RUST_LOG` and defaults to `warn`:
//!
//! ```bash
//! RUST_LOG=memcheck_runner=debug memcheck-runner
//! ```
//!
//! 通过 `tracing` 输出开发者诊断信息。事件写到 stderr，使 stdout 只包含报告。
//! 详细程度由 `RUST_LOG` 控制，默认为 `warn`。

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
