// Shared test helpers for integration tests
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::path::Path;

/// The seven input columns, in sheet order.
pub const INPUT_HEADERS: [&str; 7] = [
    "TestCaseID",
    "Method",
    "URL",
    "Headers",
    "Payload",
    "ExpectedStatusCode",
    "ExpectedResponse",
];

/// Starts a stub HTTP server on an ephemeral local port and returns its
/// address. The routes cover the scenarios the batch runner exercises:
/// plain text, JSON objects, echoing POST/PUT, and a 404.
pub async fn spawn_stub_server() -> SocketAddr {
    let app = Router::new()
        .route("/hello", get(|| async { "hello world" }))
        .route(
            "/json",
            get(|| async { Json(serde_json::json!({"title": "foo", "id": 101})) }),
        )
        .route(
            "/items",
            axum::routing::post(|body: String| async move { (StatusCode::CREATED, body) }),
        )
        .route(
            "/items/1",
            axum::routing::put(|body: String| async move { body })
                .delete(|| async { StatusCode::OK }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "not here") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server died");
    });

    addr
}

/// Writes an input workbook: the seven-column header row followed by the
/// given data rows.
pub fn write_input_workbook(path: &Path, rows: &[[&str; 7]]) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_mut(&0)
        .expect("Freshly created workbook has no sheet");

    for (col, header) in INPUT_HEADERS.iter().enumerate() {
        sheet.get_cell_mut(((col + 1) as u32, 1)).set_value(*header);
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet
                .get_cell_mut(((c + 1) as u32, (r + 2) as u32))
                .set_value(*value);
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).expect("Failed to write input workbook");
}

/// Reads every populated cell of the first sheet back as text,
/// row-major, including the header row.
pub fn read_sheet_rows(path: &Path) -> Vec<Vec<String>> {
    let book = umya_spreadsheet::reader::xlsx::read(path).expect("Failed to read workbook");
    let sheet = book.get_sheet(&0).expect("Workbook has no sheet");
    let rows = sheet.get_highest_row();
    let cols = sheet.get_highest_column();

    (1..=rows)
        .map(|r| (1..=cols).map(|c| sheet.get_value((c, r))).collect())
        .collect()
}
