//! # HTTP Dispatcher Module / HTTP 分发模块
//!
//! Performs the actual HTTP call for a prepared request and captures the
//! response status and body text. One client is shared across the batch;
//! calls are strictly sequential. No timeout beyond the client default,
//! no retries, default redirect policy.
//!
//! 为准备好的请求执行实际的 HTTP 调用，并捕获响应状态码和正文文本。
//! 整个批次共享一个客户端；调用严格按顺序进行。除客户端默认值外没有
//! 超时，不重试，使用默认的重定向策略。

use anyhow::{Context, Result};

use crate::core::request::PreparedRequest;

/// The captured outcome of a completed HTTP call.
/// 一次完成的 HTTP 调用所捕获的结果。
#[derive(Debug, Clone)]
pub struct HttpExchange {
    /// Numeric HTTP status code / HTTP 数字状态码
    pub status: u16,
    /// Raw response body text / 原始响应正文文本
    pub body: String,
}

/// Wraps the shared `reqwest::Client` used for every row of a batch.
pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Sends the request and captures status and body. Any error on the
    /// way, from URL parsing up to reading the body, propagates as an
    /// `Err` for the caller's row boundary to absorb.
    pub async fn dispatch(&self, request: PreparedRequest) -> Result<HttpExchange> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("Request to '{}' failed", request.url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from '{}'", request.url))?;

        Ok(HttpExchange { status, body })
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
