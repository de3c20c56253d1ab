//! # Request Builder Module / 请求构建模块
//!
//! Turns one `TestCase` row into a dispatch-ready request description.
//! Header and payload parsing are explicit fallible steps so a malformed
//! cell fails its own row at the batch runner's row boundary instead of
//! throwing from somewhere inside a library call.
//!
//! 将一个 `TestCase` 行转换为可直接分发的请求描述。
//! 请求头和载荷的解析是显式的可失败步骤，因此格式错误的单元格会在
//! 批次运行器的行边界处使其所在行失败，而不是从某个库调用内部抛出。

use anyhow::{anyhow, bail, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

use crate::core::models::TestCase;

/// A fully resolved request: method, URL, headers and an optional body.
/// 完全解析后的请求：方法、URL、请求头以及可选的请求体。
#[derive(Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// Compact JSON re-serialization of the payload; only POST/PUT carry one.
    /// 载荷的紧凑 JSON 重序列化；只有 POST/PUT 携带请求体。
    pub body: Option<String>,
}

/// Parses the raw Headers cell: one `Key: Value` pair per line, split on
/// the first `": "`. A line without the separator is an error for the row.
pub fn parse_headers(raw: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if raw.is_empty() {
        return Ok(headers);
    }

    for line in raw.split('\n') {
        let (key, value) = line
            .split_once(": ")
            .ok_or_else(|| anyhow!("Invalid header line: '{line}' (expected 'Key: Value')"))?;
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| anyhow!("Invalid header name '{key}': {e}"))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| anyhow!("Invalid header value '{value}': {e}"))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Re-serializes the Payload cell for the output workbook: an indented
/// rendering when it parses as JSON, an `Error parsing Payload:` marker
/// otherwise. A malformed payload does not stop the row here: for
/// POST/PUT the second parse in [`build_request`] is what fails it, and
/// for GET/DELETE the payload is ignored entirely.
pub fn pretty_payload(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(e) => format!("Error parsing Payload: {e}"),
    }
}

/// Builds a dispatch-ready request from a test case.
///
/// GET and DELETE send no body and use the parsed headers verbatim.
/// POST and PUT force `Content-Type: application/json` (overriding any
/// user-supplied value) and send the re-parsed payload as the body.
/// Any other method string is an error for the row.
pub fn build_request(case: &TestCase) -> Result<PreparedRequest> {
    let method = match case.method.to_uppercase().as_str() {
        "GET" => Method::GET,
        "POST" => Method::POST,
        "PUT" => Method::PUT,
        "DELETE" => Method::DELETE,
        other => bail!("Unsupported HTTP Method: {other}"),
    };

    let mut headers = parse_headers(&case.headers)?;

    let body = if method == Method::POST || method == Method::PUT {
        let value: Value = serde_json::from_str(&case.payload)
            .map_err(|e| anyhow!("Error parsing Payload: {e}"))?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Some(serde_json::to_string(&value)?)
    } else {
        None
    };

    Ok(PreparedRequest {
        method,
        url: case.url.clone(),
        headers,
        body,
    })
}
