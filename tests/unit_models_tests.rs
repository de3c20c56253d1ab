//! # Models Module Unit Tests / 模型模块单元测试
//!
//! Tests for the result accessors that feed the output workbook and the
//! reports: verdict text, actual status rendering and blank-row detection.
//!
//! 为输出工作簿和报告提供数据的结果访问器的测试：判定文本、
//! 实际状态渲染和空行检测。

use sheet_runner::core::models::{
    FailureReason, TestCase, TestResult, EXCEPTION_STATUS,
};
use std::time::Duration;

fn sample_case() -> TestCase {
    TestCase {
        id: "TC_01".to_string(),
        method: "GET".to_string(),
        url: "http://example.test/hello".to_string(),
        headers: String::new(),
        payload: String::new(),
        expected_status: "200".to_string(),
        expected_response: "hello".to_string(),
    }
}

fn passed(status: u16) -> TestResult {
    TestResult::Passed {
        case: sample_case(),
        payload_pretty: String::new(),
        status,
        body: "hello world".to_string(),
        duration: Duration::from_millis(12),
    }
}

fn failed(status: Option<u16>, reason: FailureReason) -> TestResult {
    TestResult::Failed {
        case: sample_case(),
        payload_pretty: String::new(),
        status,
        body: "boom".to_string(),
        reason,
        duration: Duration::from_millis(34),
    }
}

mod verdict_tests {
    use super::*;

    #[test]
    fn verdict_text_is_never_localized() {
        assert_eq!(passed(200).verdict_str(), "Pass");
        assert_eq!(failed(Some(500), FailureReason::StatusMismatch).verdict_str(), "Fail");
        assert_eq!(failed(None, FailureReason::Exception).verdict_str(), "Fail");
    }

    #[test]
    fn is_failure_matches_the_variant() {
        assert!(!passed(200).is_failure());
        assert!(failed(Some(200), FailureReason::BodyMismatch).is_failure());
    }

    #[test]
    fn failure_reason_is_none_for_passed_rows() {
        assert_eq!(passed(200).failure_reason(), None);
        assert_eq!(
            failed(Some(200), FailureReason::BodyMismatch).failure_reason(),
            Some(FailureReason::BodyMismatch)
        );
    }
}

mod status_tests {
    use super::*;

    #[test]
    fn completed_rows_render_the_numeric_code() {
        assert_eq!(passed(201).actual_status_string(), "201");
        assert_eq!(
            failed(Some(404), FailureReason::StatusMismatch).actual_status_string(),
            "404"
        );
    }

    #[test]
    fn rows_without_an_exchange_render_the_sentinel() {
        assert_eq!(
            failed(None, FailureReason::Exception).actual_status_string(),
            EXCEPTION_STATUS
        );
    }

    #[test]
    fn display_combines_id_verdict_and_status() {
        let rendered = format!("{}", passed(200));
        assert_eq!(rendered, "[TC_01] Pass (200)");

        let rendered = format!("{}", failed(None, FailureReason::Exception));
        assert_eq!(rendered, "[TC_01] Fail (Exception)");
    }
}

mod css_class_tests {
    use super::*;

    #[test]
    fn classes_distinguish_exceptions_from_plain_failures() {
        assert_eq!(passed(200).status_class(), "status-pass");
        assert_eq!(
            failed(Some(200), FailureReason::BodyMismatch).status_class(),
            "status-fail"
        );
        assert_eq!(
            failed(None, FailureReason::Exception).status_class(),
            "status-exception"
        );
    }
}

mod case_tests {
    use super::*;

    #[test]
    fn a_row_of_empty_cells_is_blank() {
        assert!(TestCase::default().is_blank());
    }

    #[test]
    fn any_non_empty_cell_makes_the_row_significant() {
        let case = TestCase {
            expected_status: "200".to_string(),
            ..TestCase::default()
        };
        assert!(!case.is_blank());
    }
}
