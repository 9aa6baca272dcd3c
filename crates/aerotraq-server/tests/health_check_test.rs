//! Health check and API documentation endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{router, send, RecordingStore};

#[tokio::test]
async fn health_check_returns_ok() {
    let (status, body) = send(router(RecordingStore::new()), "GET", "/health", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_lists_intake_paths() {
    let (status, body) = send(
        router(RecordingStore::new()),
        "GET",
        "/api-docs/openapi.json",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/submit-access").is_some());
    assert!(body["paths"].get("/api/submit-buyer").is_some());
}
