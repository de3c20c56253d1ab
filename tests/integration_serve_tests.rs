//! # Intake Interface Integration Tests / 接入层集成测试
//!
//! End-to-end exercises of the upload routes: the form page, upload
//! rejections, and the full upload-then-run round trip against a local
//! stub server.
//!
//! 上传路由的端到端演练：表单页面、上传拒绝，以及针对本地桩服务器的
//! 完整“上传后运行”往返流程。

mod common;

use common::{read_sheet_rows, spawn_stub_server, write_input_workbook};
use reqwest::multipart::{Form, Part};
use sheet_runner::commands::serve;
use sheet_runner::core::config::RunnerConfig;
use std::net::SocketAddr;
use std::path::Path;

/// Binds the intake router on an ephemeral port, storing uploads under
/// the given directory.
async fn spawn_intake(upload_dir: &Path) -> SocketAddr {
    let config = RunnerConfig {
        upload_dir: upload_dir.to_path_buf(),
        ..RunnerConfig::default()
    };
    let app = serve::router(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind intake server");
    let addr = listener.local_addr().expect("Intake server has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Intake server died");
    });
    addr
}

fn form_with_file(bytes: Vec<u8>, filename: &str) -> Form {
    Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()))
}

#[tokio::test]
async fn root_redirects_to_the_upload_form() {
    let temp = tempfile::tempdir().unwrap();
    let addr = spawn_intake(temp.path()).await;

    // The client follows the redirect and lands on the form.
    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("multipart/form-data"));
}

#[tokio::test]
async fn disallowed_extension_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let addr = spawn_intake(temp.path()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/upload"))
        .multipart(form_with_file(vec![1, 2, 3], "cases.csv"))
        .send()
        .await
        .unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("File type not allowed"));
}

#[tokio::test]
async fn upload_without_a_filename_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let addr = spawn_intake(temp.path()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/upload"))
        .multipart(Form::new().part("file", Part::bytes(vec![1, 2, 3])))
        .send()
        .await
        .unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("No selected file"));
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let addr = spawn_intake(temp.path()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/upload"))
        .multipart(Form::new().text("other", "value"))
        .send()
        .await
        .unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("No file part"));
}

#[tokio::test]
async fn upload_then_run_round_trip() {
    let stub = spawn_stub_server().await;
    let temp = tempfile::tempdir().unwrap();
    let uploads = temp.path().join("uploads");
    std::fs::create_dir_all(&uploads).unwrap();
    let addr = spawn_intake(&uploads).await;

    // Stage a workbook on disk, then send its bytes through the form.
    let hello = format!("http://{stub}/hello");
    let staged = temp.path().join("staged.xlsx");
    write_input_workbook(&staged, &[["TC_01", "GET", &hello, "", "", "200", "hello"]]);
    let bytes = std::fs::read(&staged).unwrap();

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/upload"))
        .multipart(form_with_file(bytes, "cases.xlsx"))
        .send()
        .await
        .unwrap();

    // The redirect chain ends on the completion page of /run/cases.xlsx.
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("output_cases.xlsx"));

    let output = uploads.join("output_cases.xlsx");
    assert!(output.exists());
    let rows = read_sheet_rows(&output);
    assert_eq!(rows[1][0], "TC_01");
    assert_eq!(rows[1][7], "Pass");
}

#[tokio::test]
async fn run_route_with_missing_file_renders_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let addr = spawn_intake(temp.path()).await;

    let response = reqwest::get(format!("http://{addr}/run/absent.xlsx"))
        .await
        .unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("Error:"));
}
