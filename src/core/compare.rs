//! # Result Comparator Module / 结果比较模块
//!
//! Decides Pass/Fail for a completed (non-exceptional) HTTP exchange.
//! The status code is compared first and a mismatch short-circuits to
//! Fail; body matching is deliberately loose (substring OR top-level
//! JSON value) to tolerate server-generated fields such as auto-assigned
//! IDs and timestamps in the expected-response authoring.
//!
//! 为已完成（非异常）的 HTTP 交互判定通过/失败。
//! 首先比较状态码，不匹配则直接判定失败；正文匹配有意保持宽松
//! （子串或顶层 JSON 值），以容忍期望响应编写中出现的服务端生成字段，
//! 如自动分配的 ID 和时间戳。

use serde_json::Value;

use crate::core::models::{FailureReason, TestCase};

/// The comparator's decision for one completed exchange.
/// 比较器对一次完成交互的判定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(FailureReason),
}

/// Applies the comparison policy, in order:
///
/// 1. stringified actual status != expected status text -> Fail;
/// 2. expected response non-empty and a literal substring of the body -> Pass;
/// 3. body parses as a JSON object and the expected response equals one
///    of its top-level values (as text) -> Pass;
/// 4. expected response empty -> Pass (status match alone suffices);
/// 5. otherwise -> Fail.
///
/// Step 3 deliberately checks top-level values only, never nested fields.
pub fn evaluate(case: &TestCase, status: u16, body: &str) -> Verdict {
    if case.expected_status != status.to_string() {
        return Verdict::Fail(FailureReason::StatusMismatch);
    }

    let expected = case.expected_response.as_str();

    if !expected.is_empty() && body.contains(expected) {
        return Verdict::Pass;
    }

    if !expected.is_empty() {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            if map.values().any(|value| value_matches(expected, value)) {
                return Verdict::Pass;
            }
        }
    }

    if expected.is_empty() {
        return Verdict::Pass;
    }

    Verdict::Fail(FailureReason::BodyMismatch)
}

/// Compares the expected text against one JSON value: string content for
/// strings, the compact serialization for everything else (workbook cells
/// always arrive as text, so numbers and booleans compare textually).
fn value_matches(expected: &str, value: &Value) -> bool {
    match value {
        Value::String(s) => s == expected,
        other => other.to_string() == expected,
    }
}
