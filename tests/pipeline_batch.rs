// file: tests/pipeline_batch.rs
// description: end-to-end tests for directory batch ingestion

use rag_client::{BatchConfig, BatchIngestor, DocumentIngestor, ServiceConfig};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        search_path: "/search".to_string(),
        ingest_path: "/add-document".to_string(),
        timeout_secs: 5,
    }
}

fn batch_config() -> BatchConfig {
    BatchConfig {
        parallel_requests: 2,
        skip_patterns: vec![".git/".to_string()],
        max_file_size_mb: 10,
    }
}

async fn batch_ingestor(server: &MockServer) -> BatchIngestor {
    let ingestor = DocumentIngestor::new(service_config(&server.uri())).unwrap();
    BatchIngestor::new(ingestor, batch_config())
}

#[tokio::test]
async fn directory_of_text_files_is_submitted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add-document"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(2)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "alpha bravo").unwrap();
    fs::write(temp.path().join("b.md"), "# charlie delta").unwrap();

    let stats = batch_ingestor(&server)
        .await
        .ingest_directory(temp.path(), None)
        .await
        .unwrap();

    assert_eq!(stats.files_scanned, 2);
    assert_eq!(stats.documents_accepted, 2);
    assert_eq!(stats.documents_rejected, 0);
    assert_eq!(stats.success_rate(), 100.0);
}

#[tokio::test]
async fn service_failures_become_rejections_without_stopping_the_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add-document"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "alpha").unwrap();
    fs::write(temp.path().join("b.txt"), "bravo").unwrap();

    let stats = batch_ingestor(&server)
        .await
        .ingest_directory(temp.path(), None)
        .await
        .unwrap();

    assert_eq!(stats.documents_accepted, 0);
    assert_eq!(stats.documents_rejected, 2);
    assert_eq!(stats.success_rate(), 0.0);
}

#[tokio::test]
async fn limit_caps_the_number_of_submissions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add-document"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "alpha").unwrap();
    fs::write(temp.path().join("b.txt"), "bravo").unwrap();
    fs::write(temp.path().join("c.txt"), "charlie").unwrap();

    let stats = batch_ingestor(&server)
        .await
        .ingest_directory(temp.path(), Some(1))
        .await
        .unwrap();

    assert_eq!(stats.files_scanned, 1);
    assert_eq!(stats.documents_accepted, 1);
}

#[tokio::test]
async fn empty_files_are_rejected_locally_without_network_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add-document"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("empty.txt"), "   \n").unwrap();

    let stats = batch_ingestor(&server)
        .await
        .ingest_directory(temp.path(), None)
        .await
        .unwrap();

    assert_eq!(stats.documents_accepted, 0);
    assert_eq!(stats.documents_rejected, 1);
}

#[tokio::test]
async fn empty_directory_yields_empty_stats() {
    let server = MockServer::start().await;

    let temp = TempDir::new().unwrap();
    let stats = batch_ingestor(&server)
        .await
        .ingest_directory(temp.path(), None)
        .await
        .unwrap();

    assert_eq!(stats.files_scanned, 0);
    assert_eq!(stats.documents_accepted, 0);
    assert_eq!(stats.documents_rejected, 0);
}
