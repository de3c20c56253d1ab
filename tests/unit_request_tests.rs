//! # Request Builder Unit Tests / 请求构建器单元测试
//!
//! Unit tests for header parsing, payload pretty-printing and method
//! dispatch in `core::request`.
//!
//! `core::request` 中请求头解析、载荷美化和方法分发的单元测试。

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use sheet_runner::core::models::TestCase;
use sheet_runner::core::request::{build_request, parse_headers, pretty_payload};

fn case(method: &str, payload: &str, headers: &str) -> TestCase {
    TestCase {
        id: "1".to_string(),
        method: method.to_string(),
        url: "https://example.test/api".to_string(),
        headers: headers.to_string(),
        payload: payload.to_string(),
        expected_status: "200".to_string(),
        expected_response: String::new(),
    }
}

mod header_tests {
    use super::*;

    #[test]
    fn empty_headers_cell_means_no_headers() {
        let map = parse_headers("").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn parses_multiple_lines() {
        let map = parse_headers("Accept: application/json\nX-Token: abc123").unwrap();
        assert_eq!(map.get("accept").unwrap(), "application/json");
        assert_eq!(map.get("x-token").unwrap(), "abc123");
    }

    #[test]
    fn value_may_contain_the_separator_again() {
        // Split happens on the first ": " only.
        let map = parse_headers("Authorization: Bearer a: b").unwrap();
        assert_eq!(map.get("authorization").unwrap(), "Bearer a: b");
    }

    #[test]
    fn line_without_separator_is_an_error() {
        let err = parse_headers("NotAHeader").unwrap_err();
        assert!(err.to_string().contains("Invalid header line"));
    }

    #[test]
    fn empty_line_is_an_error() {
        let err = parse_headers("Accept: text/plain\n").unwrap_err();
        assert!(err.to_string().contains("Invalid header line"));
    }
}

mod payload_tests {
    use super::*;

    #[test]
    fn empty_payload_stays_empty() {
        assert_eq!(pretty_payload(""), "");
    }

    #[test]
    fn valid_json_is_reindented() {
        let pretty = pretty_payload(r#"{"title":"foo","userId":2}"#);
        assert!(pretty.contains("\"title\": \"foo\""));
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn invalid_json_yields_marker_message() {
        let pretty = pretty_payload("{not json");
        assert!(pretty.starts_with("Error parsing Payload:"));
    }
}

mod dispatch_tests {
    use super::*;

    #[test]
    fn get_sends_no_body_and_keeps_headers_verbatim() {
        let prepared = build_request(&case("get", "", "Accept: text/plain")).unwrap();
        assert_eq!(prepared.method, Method::GET);
        assert!(prepared.body.is_none());
        assert_eq!(prepared.headers.get("accept").unwrap(), "text/plain");
        assert!(prepared.headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn delete_sends_no_body() {
        let prepared = build_request(&case("DELETE", r#"{"ignored": true}"#, "")).unwrap();
        assert_eq!(prepared.method, Method::DELETE);
        assert!(prepared.body.is_none());
    }

    #[test]
    fn post_reserializes_payload_compactly() {
        let prepared = build_request(&case("POST", "{\"a\": 1,\n  \"b\": 2}", "")).unwrap();
        assert_eq!(prepared.method, Method::POST);
        assert_eq!(prepared.body.as_deref(), Some(r#"{"a":1,"b":2}"#));
    }

    #[test]
    fn post_forces_json_content_type_over_user_value() {
        let prepared =
            build_request(&case("POST", "{}", "Content-Type: text/plain")).unwrap();
        assert_eq!(
            prepared.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn put_with_unparsable_payload_fails_the_row() {
        let err = build_request(&case("PUT", "{broken", "")).unwrap_err();
        assert!(err.to_string().starts_with("Error parsing Payload:"));
    }

    #[test]
    fn post_with_empty_payload_fails_the_row() {
        let err = build_request(&case("POST", "", "")).unwrap_err();
        assert!(err.to_string().starts_with("Error parsing Payload:"));
    }

    #[test]
    fn method_is_case_insensitive() {
        assert_eq!(build_request(&case("gEt", "", "")).unwrap().method, Method::GET);
        assert_eq!(
            build_request(&case("put", "{}", "")).unwrap().method,
            Method::PUT
        );
    }

    #[test]
    fn unsupported_method_is_an_error() {
        let err = build_request(&case("PATCH", "{}", "")).unwrap_err();
        assert!(err.to_string().contains("Unsupported HTTP Method: PATCH"));
    }
}
