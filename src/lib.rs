//! # Memcheck Runner Library / Memcheck Runner 库
//!
//! This library provides the functionality behind the `memcheck-runner` tool,
//! which feeds every file of a fixtures directory to a program running under an
//! external memory checker and prints one pass/fail line per fixture.
//!
//! 此库为 `memcheck-runner` 工具提供功能：把测试输入目录中的每个文件
//! 交给在外部内存检查器下运行的程序，并为每个文件输出一行通过/失败结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, fixture discovery, outcome models and the run loop
//! - `infra` - Checker command construction, file system helpers and logging
//! - `reporting` - Console report lines and the optional JSON report
//! - `cli` - Command-line interface and commands

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

/// Selects the language for auxiliary messages.
///
/// An explicit language wins. Otherwise the system locale is used, matching the
/// full locale first (e.g. "zh-CN"), then just the language code (e.g. "en"),
/// and finally falling back to "en".
pub fn init(language: Option<&str>) {
    let locale = language
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

rust_i18n::i18n!("locales", fallback = "en");
