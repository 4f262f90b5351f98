//! # Fixture Discovery Module / 测试输入发现模块
//!
//! Turns the fixtures directory into the list of fixtures to check. Only
//! regular files count (symlinks are followed); nested directories and other
//! entries are skipped without a report line.
//!
//! 把测试输入目录转换为待检查的测试输入列表。只计入普通文件
//! （会跟随符号链接），嵌套目录和其他条目被跳过，且不输出报告行。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::Fixture;

/// Lists the fixtures in `dir` in the order the file system returns them.
///
/// The order is not sorted and may differ between platforms and file systems.
pub fn discover_fixtures(dir: &Path) -> Result<Vec<Fixture>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list fixtures directory: {}", dir.display()))?;

    let mut fixtures = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
        let path = entry.path();

        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        fixtures.push(Fixture {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    Ok(fixtures)
}
