use std::path::Path;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::DateTime;
use serde_json::{json, Value};
use status_server::config::Config;
use status_server::{create_app, AppState};

fn test_config(metadata_dir: &Path) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        secret_key: "test-secret".to_string(),
        environment: "test".to_string(),
        metadata_dir: metadata_dir.to_path_buf(),
        // Keep the CPU sampling wait short so the status-page test stays fast
        cpu_sample_window: Duration::from_millis(200),
    }
}

fn test_server(metadata_dir: &Path) -> TestServer {
    let state = AppState::new(test_config(metadata_dir));
    TestServer::new(create_app(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["build_number"], "unknown");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    let deployment_date = body["deployment_date"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(deployment_date).is_ok());
}

#[tokio::test]
async fn test_hello_defaults_to_world() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/api/hello").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Hello, World!");
    assert_eq!(body["build"], "unknown");
}

#[tokio::test]
async fn test_hello_greets_named_caller() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server
        .get("/api/hello")
        .add_query_param("name", "Rustacean")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Hello, Rustacean!");
}

#[tokio::test]
async fn test_echo_get_returns_query_params() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server
        .get("/api/echo")
        .add_query_param("a", "1")
        .add_query_param("b", "2")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["query_params"], json!({"a": "1", "b": "2"}));
}

#[tokio::test]
async fn test_echo_post_returns_json_body() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.post("/api/echo").json(&json!({"x": 1})).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["received_data"], json!({"x": 1}));
}

#[tokio::test]
async fn test_echo_post_without_body_returns_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.post("/api/echo").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["received_data"], json!({}));
}

#[tokio::test]
async fn test_echo_post_with_invalid_json_returns_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.post("/api/echo").text("this is not json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["received_data"], json!({}));
}

#[tokio::test]
async fn test_deployment_defaults_when_no_metadata_files() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/api/deployment").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["build_number"], "unknown");
    assert_eq!(body["commit_hash"], "unknown");
    assert_eq!(body["deployment_time"], "unknown");
}

#[tokio::test]
async fn test_deployment_reads_pipeline_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "build-417\n").unwrap();
    std::fs::write(dir.path().join("commit.txt"), "abcdef1234567890\n").unwrap();
    std::fs::write(
        dir.path().join("deployment-info.txt"),
        "2026-08-01T12:00:00Z\n",
    )
    .unwrap();
    let server = test_server(dir.path());

    let response = server.get("/api/deployment").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["build_number"], "build-417");
    assert_eq!(body["commit_hash"], "abcdef12");
    assert_eq!(body["deployment_time"], "2026-08-01T12:00:00Z");
}

#[tokio::test]
async fn test_system_info_figures_are_sane() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/api/info").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();

    let memory_total = body["memory_total_gb"].as_f64().unwrap();
    let memory_available = body["memory_available_gb"].as_f64().unwrap();
    assert!(memory_total >= 0.0);
    assert!(memory_available <= memory_total);

    let disk_total = body["disk_usage"]["total_gb"].as_f64().unwrap();
    let disk_free = body["disk_usage"]["free_gb"].as_f64().unwrap();
    assert!(disk_total >= 0.0);
    assert!(disk_free <= disk_total);

    assert!(body["cpu_count"].as_u64().unwrap() >= 1);
    assert!(!body["hostname"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_diagnostics_reports_environment() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/api/test").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["test_data"]["environment"], "test");
    assert!(!body["test_data"]["hostname"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_html_pages_render() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    for path in ["/", "/about", "/status"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "page {path}");
        assert!(response.text().contains("<!DOCTYPE html>"), "page {path}");
    }
}

#[tokio::test]
async fn test_home_page_shows_deployment_metadata() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("commit.txt"), "deadbeefcafe\n").unwrap();
    let server = test_server(dir.path());

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("deadbeef"));
}

#[tokio::test]
async fn test_unmatched_path_returns_404_page() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("404"));
}
