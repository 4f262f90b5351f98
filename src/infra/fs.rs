//! # File System Operations Module / 文件系统操作模块
//!
//! Small path helpers shared by the run loop and the `init` command.
//!
//! 运行循环和 `init` 命令共用的路径辅助函数。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Writes `contents` to `path`, creating missing parent directories first.
pub fn write_creating_parents(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, contents).with_context(|| format!("Failed to write file: {}", path.display()))
}
