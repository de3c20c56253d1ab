//! # Batch Runner Module / 批次运行模块
//!
//! The orchestration loop: iterate rows in order, build and dispatch each
//! request, compare the outcome, and write the output workbook once at the
//! end. The per-row isolation boundary lives here: any error from the
//! request builder or the dispatcher is caught at the row call site and
//! turned into an exception result, and the batch continues.
//!
//! 编排循环：按顺序遍历各行，为每行构建并分发请求、比较结果，
//! 最后一次性写出输出工作簿。按行隔离边界就在这里——请求构建器或
//! 分发器的任何错误都会在行调用点被捕获并转化为异常结果，批次继续执行。

use anyhow::Result;
use colored::*;
use std::path::Path;
use std::time::Instant;

use crate::{
    core::{
        compare::{self, Verdict},
        dispatch::{Dispatcher, HttpExchange},
        models::{FailureReason, TestCase, TestResult},
        request,
    },
    infra::{sheet, t},
};

/// The accumulated outcome of one batch run.
/// 一次批次运行的累计结果。
#[derive(Debug)]
pub struct BatchReport {
    /// One result per input row, in input order.
    /// 每个输入行一个结果，顺序与输入一致。
    pub results: Vec<TestResult>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_failure()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failure())
    }
}

/// Runs a whole batch: load the input workbook, process every row
/// sequentially, write the output workbook.
///
/// An unreadable input file or an unwritable output file is batch-fatal
/// and propagates as an `Err`; no output file is produced for a failed
/// load. Row-level problems never surface here; they are absorbed into
/// that row's result by [`run_case`].
pub async fn run_batch(input: &Path, output: &Path) -> Result<BatchReport> {
    let locale = rust_i18n::locale().to_string();

    println!(
        "{}",
        t!("run.loading_cases", locale = &locale, path = input.display())
    );
    let cases = sheet::load_cases(input)?;
    println!(
        "{}",
        t!("run.loaded_cases", locale = &locale, count = cases.len()).cyan()
    );
    if cases.is_empty() {
        println!("{}", t!("run.no_cases", locale = &locale).yellow());
    }

    let dispatcher = Dispatcher::new();
    let mut results = Vec::with_capacity(cases.len());

    for case in cases {
        println!(
            "{}",
            t!(
                "run.case_running",
                locale = &locale,
                id = &case.id,
                method = &case.method,
                url = &case.url
            )
            .blue()
        );

        let result = run_case(&dispatcher, case).await;

        match &result {
            TestResult::Passed { case, status, duration, .. } => {
                println!(
                    "{}",
                    t!(
                        "run.case_passed",
                        locale = &locale,
                        id = &case.id,
                        status = status,
                        duration = format!("{:.2}", duration.as_secs_f64())
                    )
                    .green()
                );
            }
            TestResult::Failed { case, reason, body, .. } => {
                if *reason == FailureReason::Exception {
                    println!(
                        "{}",
                        t!(
                            "run.case_exception",
                            locale = &locale,
                            id = &case.id,
                            message = body
                        )
                        .red()
                    );
                } else {
                    println!(
                        "{}",
                        t!(
                            "run.case_failed",
                            locale = &locale,
                            id = &case.id,
                            reason = result.reason_str(&locale)
                        )
                        .red()
                    );
                }
            }
        }

        results.push(result);
    }

    sheet::write_results(&results, output)?;
    println!(
        "{}",
        t!("run.results_written", locale = &locale, path = output.display())
    );

    Ok(BatchReport { results })
}

/// Processes a single row. This function is the row isolation boundary:
/// it never returns an error; whatever goes wrong becomes a `Failed`
/// result with the `Exception` status sentinel and the error message as
/// the response body.
pub async fn run_case(dispatcher: &Dispatcher, case: TestCase) -> TestResult {
    let payload_pretty = request::pretty_payload(&case.payload);
    let started = Instant::now();

    // Building can fail (unsupported method, bad headers, bad payload)
    // before any network traffic happens; both stages share the boundary.
    let exchange = match request::build_request(&case) {
        Ok(prepared) => dispatcher.dispatch(prepared).await,
        Err(e) => Err(e),
    };
    let duration = started.elapsed();

    match exchange {
        Ok(HttpExchange { status, body }) => match compare::evaluate(&case, status, &body) {
            Verdict::Pass => TestResult::Passed {
                case,
                payload_pretty,
                status,
                body,
                duration,
            },
            Verdict::Fail(reason) => TestResult::Failed {
                case,
                payload_pretty,
                status: Some(status),
                body,
                reason,
                duration,
            },
        },
        Err(e) => TestResult::Failed {
            case,
            payload_pretty,
            status: None,
            body: format!("{e:#}"),
            reason: FailureReason::Exception,
            duration,
        },
    }
}
