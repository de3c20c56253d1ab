//! # Sheet Runner Library / Sheet Runner 库
//!
//! This library provides the core functionality for the Sheet Runner tool,
//! a spreadsheet-driven batch API test runner: every row of an input
//! workbook describes one HTTP request and its expected outcome, and every
//! row produces exactly one result row in the output workbook.
//!
//! 此库为 Sheet Runner 工具提供核心功能，
//! 这是一个由电子表格驱动的批量 API 测试运行器：输入工作簿的每一行
//! 描述一个 HTTP 请求及其期望结果，并在输出工作簿中恰好产生一行结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, request building, dispatch, comparison and the batch runner
//! - `infra` - Infrastructure services like workbook I/O and file system helpers
//! - `reporting` - Console summaries and HTML pages/reports
//! - `cli` - Command-line interface
//! - `commands` - Implementations of the `run`, `serve` and `init` commands
//!
//! - `core` - 数据模型、请求构建、分发、比较以及批次运行器
//! - `infra` - 基础设施服务，如工作簿读写和文件系统辅助功能
//! - `reporting` - 控制台摘要和 HTML 页面/报告
//! - `cli` - 命令行接口
//! - `commands` - `run`、`serve` 和 `init` 命令的实现

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::batch;
pub use crate::core::config;
pub use crate::core::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's console output. It attempts to match the
/// full locale (e.g., "zh-CN"), then just the language code (e.g., "en"),
/// and finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
