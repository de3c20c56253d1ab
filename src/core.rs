//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Sheet Runner:
//! the row data models, runner configuration, request building,
//! HTTP dispatch, result comparison and the batch runner itself.
//!
//! 此模块包含 Sheet Runner 的核心功能：
//! 行数据模型、运行器配置、请求构建、HTTP 分发、结果比较以及批次运行器本身。

pub mod batch;
pub mod compare;
pub mod config;
pub mod dispatch;
pub mod models;
pub mod request;

// Re-exports
pub use self::batch::run_batch;
pub use self::config::RunnerConfig;
pub use self::models::TestResult;
