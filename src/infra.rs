//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Sheet Runner,
//! including workbook I/O, file system helpers and i18n support.
//!
//! 此模块为 Sheet Runner 提供基础设施服务，
//! 包括工作簿读写、文件系统辅助功能和国际化支持。

pub mod fs;
pub mod sheet;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
