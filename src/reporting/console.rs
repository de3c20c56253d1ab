//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the colorful end-of-batch summary table and, for failed rows,
//! the expected-vs-actual details.
//!
//! 打印彩色的批次结束摘要表格，并为失败的行打印期望与实际的对比详情。

use colored::*;

use crate::core::models::{FailureReason, TestResult};
use crate::infra::t;

/// Prints a formatted summary of the batch to the console: one line per
/// row with its verdict, identifier, request and duration, followed by a
/// totals line.
///
/// 在控制台打印批次的格式化摘要：每行一条，包含判定、标识符、请求和
/// 耗时，最后是一条合计行。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - Pass | 1     | GET https://example.test/ok          |      0.12s
///   - Fail | 2     | POST https://example.test/items      |      0.34s
/// Total: 2   Passed: 1   Failed: 1
/// ```
pub fn print_summary(results: &[TestResult], locale: &str) {
    println!("\n{}", t!("summary.banner", locale = locale).bold());

    for result in results {
        let case = result.case();
        let status_str = result.status_str(locale);
        let status_colored = if result.is_failure() {
            status_str.red()
        } else {
            status_str.green()
        };
        let duration_str = format!("{:.2}s", result.duration().as_secs_f64());

        println!(
            "  - {:<6} | {:<8} | {:<50} | {:>9}",
            status_colored,
            case.id,
            format!("{} {}", case.method.to_uppercase(), case.url),
            duration_str
        );
    }

    let passed = results.iter().filter(|r| !r.is_failure()).count();
    let failed = results.len() - passed;
    println!(
        "{}",
        t!(
            "summary.totals",
            locale = locale,
            total = results.len(),
            passed = passed,
            failed = failed
        )
        .bold()
    );
}

/// Prints detailed information about every failed row: the expected
/// status and response from the sheet, the actual status, and the raw
/// response body (or the exception message). Returns early when there is
/// nothing to print.
///
/// 打印每个失败行的详细信息：工作表中的期望状态码和期望响应、实际
/// 状态码，以及原始响应正文（或异常消息）。没有失败行时直接返回。
pub fn print_failure_details(failures: &[&TestResult], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("summary.failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, result) in failures.iter().enumerate() {
        let case = result.case();
        println!(
            "[{}/{}] '{}' {} {}",
            i + 1,
            failures.len(),
            case.id.cyan(),
            case.method.to_uppercase(),
            case.url
        );
        println!("  {}", result.reason_str(locale).yellow());
        println!(
            "  {}",
            t!(
                "summary.expected_line",
                locale = locale,
                status = &case.expected_status,
                response = &case.expected_response
            )
        );
        if result.failure_reason() != Some(FailureReason::Exception) {
            println!(
                "  {}",
                t!(
                    "summary.actual_line",
                    locale = locale,
                    status = result.actual_status_string()
                )
            );
        }
        if !result.body().is_empty() {
            println!("{}", result.body());
        }
        println!("{}", "-".repeat(80));
    }
}
