//! # Serve Command Module / 服务命令模块
//!
//! The intake surface: a small axum application with an upload form.
//! An uploaded workbook is extension-checked, stored under the configured
//! upload directory, and then run as a batch; the output filename is the
//! input filename with the configured prefix. Failures surface to the
//! browser as messages beginning with `Error:`.
//!
//! 接入层：一个带上传表单的小型 axum 应用。
//! 上传的工作簿经过扩展名检查后存入配置的上传目录，然后作为批次运行；
//! 输出文件名是带配置前缀的输入文件名。失败会以 `Error:` 开头的消息
//! 呈现给浏览器。

use anyhow::{Context, Result};
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    cli::DEFAULT_CONFIG_FILE,
    core::{batch, config::RunnerConfig},
    infra::{fs, t},
    reporting::html,
};

/// Shared, read-only state of the upload interface. The configuration is
/// resolved once at startup and passed to every handler; no globals.
/// 上传界面的共享只读状态。配置在启动时解析一次并传给每个处理器，
/// 没有全局变量。
#[derive(Clone)]
struct AppState {
    config: Arc<RunnerConfig>,
}

/// Builds the intake router over a resolved configuration.
/// 基于已解析的配置构建接入路由。
pub fn router(config: RunnerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/", get(index))
        .route("/upload", get(upload_form).post(upload_workbook))
        .route("/run/:filename", get(run_uploaded))
        .with_state(state)
}

/// Executes the serve command: resolve configuration, make sure the
/// upload directory exists, and serve the intake routes until the
/// process is stopped.
pub async fn execute(config: Option<PathBuf>, bind: Option<String>) -> Result<()> {
    let mut config = RunnerConfig::resolve(
        config.as_deref(),
        std::path::Path::new(DEFAULT_CONFIG_FILE),
    )?;
    if let Some(addr) = bind {
        config.bind_addr = addr;
    }
    rust_i18n::set_locale(&config.language);
    let locale = config.language.clone();

    fs::ensure_dir(&config.upload_dir)?;

    let bind_addr = config.bind_addr.clone();
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    println!(
        "{}",
        t!("serve.listening", locale = &locale, addr = listener.local_addr()?)
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// The root route redirects to the upload form.
async fn index() -> Redirect {
    Redirect::to("/upload")
}

async fn upload_form() -> Html<String> {
    Html(html::upload_page(None).into_string())
}

/// Accepts the multipart upload and redirects to the run view on success;
/// re-renders the form with the error message otherwise.
async fn upload_workbook(State(state): State<AppState>, multipart: Multipart) -> Response {
    match save_upload(&state.config, multipart).await {
        Ok(filename) => Redirect::to(&format!("/run/{filename}")).into_response(),
        Err(message) => Html(html::upload_page(Some(&message)).into_string()).into_response(),
    }
}

/// Stores the uploaded file under the configured upload directory.
/// Returns the sanitized filename, or a user-facing error message.
async fn save_upload(config: &RunnerConfig, mut multipart: Multipart) -> Result<String, String> {
    let locale = rust_i18n::locale().to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Error: {e}"))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original = field.file_name().map(str::to_string).unwrap_or_default();
        if original.is_empty() {
            return Err(t!("serve.error_no_filename", locale = &locale).to_string());
        }
        if !fs::has_allowed_extension(&original, &config.allowed_extensions) {
            return Err(t!("serve.error_bad_extension", locale = &locale).to_string());
        }
        let filename = fs::sanitize_filename(&original);
        if filename.is_empty() {
            return Err(t!("serve.error_no_filename", locale = &locale).to_string());
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| format!("Error: {e}"))?;
        let path = config.upload_dir.join(&filename);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| format!("Error: failed to store upload: {e}"))?;

        println!(
            "{}",
            t!("serve.upload_saved", locale = &locale, name = &filename)
        );
        return Ok(filename);
    }

    Err(t!("serve.error_no_file", locale = &locale).to_string())
}

/// Runs the batch for an already uploaded workbook. A batch-fatal error
/// (missing file, unreadable workbook) renders the upload form again with
/// an `Error:` message; row-level failures are normal results and land in
/// the output workbook.
async fn run_uploaded(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    let locale = rust_i18n::locale().to_string();
    let name = fs::sanitize_filename(&filename);
    let input = state.config.upload_dir.join(&name);
    let output = state
        .config
        .upload_dir
        .join(format!("{}{}", state.config.output_prefix, name));

    println!(
        "{}",
        t!("serve.running", locale = &locale, path = input.display())
    );

    match batch::run_batch(&input, &output).await {
        Ok(report) => Html(html::completed_page(&output, &report).into_string()).into_response(),
        Err(e) => {
            Html(html::upload_page(Some(&format!("Error: {e:#}"))).into_string()).into_response()
        }
    }
}
