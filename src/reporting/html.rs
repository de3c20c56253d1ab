//! # HTML Reporting Module / HTML 报告模块
//!
//! All maud-rendered HTML: the optional report file produced by the `run`
//! command, and the pages served by the upload interface.
//!
//! 所有由 maud 渲染的 HTML：`run` 命令生成的可选报告文件，
//! 以及上传界面提供的页面。

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

use crate::core::batch::BatchReport;
use crate::core::models::TestResult;
use crate::infra::t;

/// Embedded CSS shared by the report file and the served pages.
/// 报告文件和页面共用的嵌入式 CSS。
const REPORT_CSS: &str = include_str!("assets/report.css");

fn page_shell(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(REPORT_CSS)) }
            }
            body { (body) }
        }
    }
}

/// Generates the HTML report file for a finished batch: summary counters
/// and one table row per test case, with the response body inlined for
/// failed rows.
///
/// 为完成的批次生成 HTML 报告文件：摘要计数器和每个测试用例一行的
/// 表格，失败行内联其响应正文。
pub fn generate_html_report(results: &[TestResult], output_path: &Path, locale: &str) -> Result<()> {
    let markup = report_page(results, locale);
    fs::write(output_path, markup.into_string())
        .with_context(|| format!("Failed to write HTML report: {}", output_path.display()))?;
    Ok(())
}

fn report_page(results: &[TestResult], locale: &str) -> Markup {
    let total = results.len();
    let failed = results.iter().filter(|r| r.is_failure()).count();
    let passed = total - failed;
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let body = html! {
        h1 { (t!("report.main_header", locale = locale)) }
        div class="summary-container" {
            div class="summary-item" {
                span class="count" { (total) }
                span class="label" { (t!("report.summary_total", locale = locale)) }
            }
            div class="summary-item" {
                span class="count passed-text" { (passed) }
                span class="label" { (t!("report.summary_passed", locale = locale)) }
            }
            div class="summary-item" {
                span class="count failed-text" { (failed) }
                span class="label" { (t!("report.summary_failed", locale = locale)) }
            }
        }
        table {
            thead {
                tr {
                    th { (t!("report.col_id", locale = locale)) }
                    th { (t!("report.col_method", locale = locale)) }
                    th { (t!("report.col_url", locale = locale)) }
                    th { (t!("report.col_expected_status", locale = locale)) }
                    th { (t!("report.col_result", locale = locale)) }
                    th { (t!("report.col_actual_status", locale = locale)) }
                    th { (t!("report.col_duration", locale = locale)) }
                }
            }
            tbody {
                @for result in results {
                    @let case = result.case();
                    tr {
                        td { (case.id) }
                        td { (case.method.to_uppercase()) }
                        td { (case.url) }
                        td { (case.expected_status) }
                        td {
                            span class={ "status-cell " (result.status_class()) } {
                                (result.verdict_str())
                            }
                        }
                        td { (result.actual_status_string()) }
                        td { (format!("{:.2}s", result.duration().as_secs_f64())) }
                    }
                    @if result.is_failure() && !result.body().is_empty() {
                        tr {
                            td colspan="7" {
                                pre class="output-content" { (result.body()) }
                            }
                        }
                    }
                }
            }
        }
        p class="generated" { (t!("report.generated_at", locale = locale, time = generated)) }
    };

    page_shell(&t!("report.title", locale = locale), body)
}

/// The upload form page, with an optional flash message (upload errors,
/// batch-fatal `Error:` strings).
pub fn upload_page(flash: Option<&str>) -> Markup {
    let locale = rust_i18n::locale().to_string();
    let body = html! {
        h1 { (t!("page.upload_heading", locale = &locale)) }
        @if let Some(message) = flash {
            p class="flash" { (message) }
        }
        form class="upload" method="post" action="/upload" enctype="multipart/form-data" {
            input type="file" name="file" accept=".xlsx";
            button type="submit" { (t!("page.upload_button", locale = &locale)) }
        }
        p class="hint" { (t!("page.upload_hint", locale = &locale)) }
    };
    page_shell(&t!("page.upload_title", locale = &locale), body)
}

/// The completion page shown after a batch triggered through the upload
/// interface has finished.
pub fn completed_page(output: &Path, report: &BatchReport) -> Markup {
    let locale = rust_i18n::locale().to_string();
    let body = html! {
        h1 { (t!("page.completed_title", locale = &locale)) }
        p { (t!("serve.completed", locale = &locale, path = output.display())) }
        div class="summary-container" {
            div class="summary-item" {
                span class="count" { (report.total()) }
                span class="label" { (t!("report.summary_total", locale = &locale)) }
            }
            div class="summary-item" {
                span class="count passed-text" { (report.passed_count()) }
                span class="label" { (t!("report.summary_passed", locale = &locale)) }
            }
            div class="summary-item" {
                span class="count failed-text" { (report.failed_count()) }
                span class="label" { (t!("report.summary_failed", locale = &locale)) }
            }
        }
        p { a href="/upload" { (t!("page.back_link", locale = &locale)) } }
    };
    page_shell(&t!("page.completed_title", locale = &locale), body)
}
