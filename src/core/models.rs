//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures of the batch runner:
//! the `TestCase` parsed from one workbook row, the `TestResult` derived
//! from it, and the reasons a row can fail.
//!
//! 此模块定义批次运行器的核心数据结构：
//! 从工作簿一行解析出的 `TestCase`、由其派生的 `TestResult`，
//! 以及一行可能失败的原因。

use crate::infra::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The sentinel written to the ActualStatusCode column when a row failed
/// with an exception instead of completing an HTTP exchange.
/// 当某行因异常失败而没有完成 HTTP 交互时，写入 ActualStatusCode 列的哨兵值。
pub const EXCEPTION_STATUS: &str = "Exception";

/// One row of the input workbook: a single HTTP request to issue and the
/// expected outcome. All fields are kept as the raw cell text; parsing
/// into typed values happens in the request builder, so a malformed cell
/// can fail its own row without touching the rest of the batch.
///
/// 输入工作簿中的一行：要发出的单个 HTTP 请求及其期望结果。
/// 所有字段都保留为单元格原始文本；向类型化值的解析发生在请求构建器中，
/// 因此格式错误的单元格只会使其所在行失败，而不会影响批次的其余部分。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestCase {
    /// Opaque identifier, display-only. Uniqueness is not enforced.
    /// 不透明标识符，仅用于显示。不强制唯一性。
    pub id: String,
    /// HTTP method as written in the sheet; GET/POST/PUT/DELETE,
    /// case-insensitive. Anything else fails the row.
    /// 工作表中书写的 HTTP 方法；GET/POST/PUT/DELETE，不区分大小写。
    /// 其他任何值都会使该行失败。
    pub method: String,
    /// Target URI, required.
    /// 目标 URI，必填。
    pub url: String,
    /// Newline-separated `Key: Value` pairs; empty means no extra headers.
    /// 以换行分隔的 `Key: Value` 键值对；为空表示没有额外请求头。
    pub headers: String,
    /// Raw payload text, expected to be JSON. Required for POST/PUT,
    /// ignored otherwise.
    /// 原始载荷文本，应为 JSON。POST/PUT 必填，其余方法忽略。
    pub payload: String,
    /// Expected status code, compared as text.
    /// 期望状态码，按文本比较。
    pub expected_status: String,
    /// Substring or top-level JSON value to look for in the response;
    /// empty means any response passes.
    /// 在响应中查找的子串或顶层 JSON 值；为空表示任何响应都通过。
    pub expected_response: String,
}

impl TestCase {
    /// `true` when every cell of the row was empty. Trailing blank rows
    /// are dropped at load; a blank row between real rows still runs and
    /// fails on its empty method.
    pub fn is_blank(&self) -> bool {
        self.id.is_empty()
            && self.method.is_empty()
            && self.url.is_empty()
            && self.headers.is_empty()
            && self.payload.is_empty()
            && self.expected_status.is_empty()
            && self.expected_response.is_empty()
    }
}

/// Enumerates the possible reasons for a test case failure.
/// This helps in categorizing rows for reporting.
/// 枚举测试用例失败的可能原因。
/// 这有助于在报告中对行进行分类。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FailureReason {
    /// The actual status code did not match the expected one. A wrong
    /// status is never an acceptable pass, regardless of the body.
    /// 实际状态码与期望不符。无论响应正文如何，错误的状态码都不可能通过。
    StatusMismatch,
    /// The status matched but the expected response was found neither as
    /// a substring nor among the top-level values of a JSON body.
    /// 状态码匹配，但期望响应既不是正文子串，也不在 JSON 正文的顶层值之中。
    BodyMismatch,
    /// The row never completed an HTTP exchange: unsupported method,
    /// malformed headers or payload, or a network-level error.
    /// 该行未完成 HTTP 交互：不支持的方法、格式错误的请求头或载荷，
    /// 或网络层错误。
    Exception,
}

/// Represents the final result of a single test case row. Exactly one
/// `TestResult` is produced per input row, in input order.
///
/// 表示单个测试用例行的最终结果。每个输入行恰好产生一个
/// `TestResult`，顺序与输入一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TestResult {
    /// The row completed its HTTP exchange and satisfied the comparison
    /// policy.
    /// 该行完成了 HTTP 交互并满足比较策略。
    Passed {
        /// The test case this result was derived from / 此结果来源的测试用例
        case: TestCase,
        /// Pretty-printed payload, or a payload parse-error message
        /// 美化后的载荷，或载荷解析错误消息
        payload_pretty: String,
        /// Actual HTTP status code / 实际 HTTP 状态码
        status: u16,
        /// Raw response body text / 原始响应正文文本
        body: String,
        /// Wall-clock time the row took / 该行的实际耗时
        duration: Duration,
    },
    /// The row failed: comparison mismatch, or a row-local exception.
    /// 该行失败：比较不匹配，或行内异常。
    Failed {
        /// The test case this result was derived from / 此结果来源的测试用例
        case: TestCase,
        /// Pretty-printed payload, or a payload parse-error message
        /// 美化后的载荷，或载荷解析错误消息
        payload_pretty: String,
        /// Actual status code; `None` when the exchange never completed
        /// 实际状态码；交互未完成时为 `None`
        status: Option<u16>,
        /// Response body, or the exception message / 响应正文，或异常消息
        body: String,
        /// The specific reason for the failure / 失败的具体原因
        reason: FailureReason,
        /// Wall-clock time the row took / 该行的实际耗时
        duration: Duration,
    },
}

impl TestResult {
    /// Gets the test case this result belongs to.
    pub fn case(&self) -> &TestCase {
        match self {
            TestResult::Passed { case, .. } => case,
            TestResult::Failed { case, .. } => case,
        }
    }

    /// The payload as written to the output Payload column: the pretty
    /// re-serialization, or an `Error parsing Payload:` message.
    pub fn payload_pretty(&self) -> &str {
        match self {
            TestResult::Passed { payload_pretty, .. } => payload_pretty,
            TestResult::Failed { payload_pretty, .. } => payload_pretty,
        }
    }

    /// The response body, or the exception message for exception rows.
    pub fn body(&self) -> &str {
        match self {
            TestResult::Passed { body, .. } => body,
            TestResult::Failed { body, .. } => body,
        }
    }

    /// The literal verdict written to the Result column. This is data,
    /// not console text, so it is never localized.
    /// 写入 Result 列的字面判定值。这是数据而非控制台文本，永不本地化。
    pub fn verdict_str(&self) -> &'static str {
        match self {
            TestResult::Passed { .. } => "Pass",
            TestResult::Failed { .. } => "Fail",
        }
    }

    /// The text written to the ActualStatusCode column: the numeric code,
    /// or the `Exception` sentinel when the exchange never completed.
    pub fn actual_status_string(&self) -> String {
        match self {
            TestResult::Passed { status, .. } => status.to_string(),
            TestResult::Failed { status: Some(code), .. } => code.to_string(),
            TestResult::Failed { status: None, .. } => EXCEPTION_STATUS.to_string(),
        }
    }

    /// Checks if the result is any kind of failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failed { .. })
    }

    /// Gets the reason of a failed row. Returns `None` for passed rows.
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            TestResult::Failed { reason, .. } => Some(*reason),
            TestResult::Passed { .. } => None,
        }
    }

    /// Gets the wall-clock duration of the row.
    pub fn duration(&self) -> Duration {
        match self {
            TestResult::Passed { duration, .. } => *duration,
            TestResult::Failed { duration, .. } => *duration,
        }
    }

    /// Gets the localized status of the result for console display.
    /// 以字符串形式获取本地化的结果状态以供控制台显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            TestResult::Passed { .. } => t!("status.pass", locale = locale).to_string(),
            TestResult::Failed { .. } => t!("status.fail", locale = locale).to_string(),
        }
    }

    /// Gets a localized one-line description of why the row failed.
    /// Returns an empty string for passed rows.
    pub fn reason_str(&self, locale: &str) -> String {
        match self {
            TestResult::Failed { case, status, reason, .. } => match reason {
                FailureReason::StatusMismatch => t!(
                    "reason.status_mismatch",
                    locale = locale,
                    expected = case.expected_status,
                    actual = status.map(|s| s.to_string()).unwrap_or_default()
                )
                .to_string(),
                FailureReason::BodyMismatch => {
                    t!("reason.body_mismatch", locale = locale).to_string()
                }
                FailureReason::Exception => t!("reason.exception", locale = locale).to_string(),
            },
            TestResult::Passed { .. } => String::new(),
        }
    }

    /// Gets the appropriate CSS class for the result status in HTML reports.
    pub fn status_class(&self) -> &'static str {
        match self {
            TestResult::Passed { .. } => "status-pass",
            TestResult::Failed { reason, .. } => {
                if *reason == FailureReason::Exception {
                    "status-exception"
                } else {
                    "status-fail"
                }
            }
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({})",
            self.case().id,
            self.verdict_str(),
            self.actual_status_string()
        )
    }
}
