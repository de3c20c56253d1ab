//! # File System Helpers Module / 文件系统辅助模块
//!
//! Small file system utilities shared by the commands: upload filename
//! sanitization, extension checks and directory creation.
//!
//! 各命令共享的小型文件系统工具：上传文件名清洗、扩展名检查和目录创建。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reduces an uploaded filename to a safe basename: path components are
/// stripped and anything outside `[A-Za-z0-9._-]` becomes `_`.
///
/// # Arguments
/// * `name` - The filename as sent by the client
///
/// # Returns
/// A sanitized basename, possibly empty if nothing safe remains
pub fn sanitize_filename(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // A name of only dots could still escape upward; reject it.
    if cleaned.chars().all(|c| c == '.') {
        String::new()
    } else {
        cleaned
    }
}

/// Checks whether a filename carries one of the allowed extensions
/// (case-insensitive). A name without any extension never matches.
pub fn has_allowed_extension(name: &str, allowed: &[String]) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| a.to_lowercase() == ext)
        }
        _ => false,
    }
}

/// Creates a directory (and its parents) if it does not exist yet.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}
