//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of batch results: colorful console
//! summaries, the HTML report file, and the pages of the upload interface.
//!
//! 此模块处理批次结果的展示：彩色控制台摘要、HTML 报告文件，
//! 以及上传界面的页面。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use self::console::{print_failure_details, print_summary};
pub use self::html::generate_html_report;
