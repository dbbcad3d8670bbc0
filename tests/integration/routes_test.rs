// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{pipeline_with, results_page, StaticProvider};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use serprs::presentation::routes::app;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(&results_page(0, 1, 0)));
    let router = app(pipeline_with(provider, dir.path()));

    let (status, body) = get_json(router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"]["/webscrape"].is_string());
    assert!(body["endpoints"]["/list_pdfs"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(""));
    let router = app(pipeline_with(provider, dir.path()));

    let (status, body) = get_json(router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_webscrape_returns_filtered_results() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(&results_page(0, 4, 3)));
    let router = app(pipeline_with(provider.clone(), dir.path()));

    let (status, body) = get_json(router, "/webscrape?query=rust%20lang&max_results=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "rust lang");
    assert_eq!(body["total_results"], 10);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 10);
    assert!(results
        .iter()
        .all(|r| r["url"].as_str().unwrap().contains(".org")));
    assert_eq!(results[0]["title"], "Result 0-0");
    assert_eq!(results[0]["description"], "An example snippet");
    // the crawl fills toward the global cap, so 4 per page exhausts max_pages
    assert_eq!(provider.fetch_count(), 10);
}

#[tokio::test]
async fn test_webscrape_defaults_to_cap() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(&results_page(0, 30, 0)));
    let router = app(pipeline_with(provider.clone(), dir.path()));

    let (status, body) = get_json(router, "/webscrape?query=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_results"], 50);
    assert_eq!(provider.fetch_count(), 2);
}

#[tokio::test]
async fn test_webscrape_rejects_out_of_range_max_results() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(&results_page(0, 5, 0)));
    let router = app(pipeline_with(provider.clone(), dir.path()));

    let (status, body) = get_json(router.clone(), "/webscrape?query=rust&max_results=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("between 1 and 50"));

    let (status, _) = get_json(router, "/webscrape?query=rust&max_results=51").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(provider.fetch_count(), 0);
}

#[tokio::test]
async fn test_webscrape_rejects_blank_query() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(&results_page(0, 5, 0)));
    let router = app(pipeline_with(provider.clone(), dir.path()));

    let (status, body) = get_json(router, "/webscrape?query=%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query parameter cannot be empty");
    assert_eq!(provider.fetch_count(), 0);
}

#[tokio::test]
async fn test_webscrape_rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(&results_page(0, 5, 0)));
    let router = app(pipeline_with(provider.clone(), dir.path()));

    let (status, _) = get_json(router, "/webscrape?query=rust&output_format=xml").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.fetch_count(), 0);
}

#[tokio::test]
async fn test_webscrape_pdf_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::new(&results_page(0, 12, 0)));
    let router = app(pipeline_with(provider, dir.path()));

    let (status, body) = get_json(
        router.clone(),
        "/webscrape?query=rust&max_results=12&output_format=pdf",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "PDF generated");
    let path = body["pdf_path"].as_str().unwrap();
    assert!(path.ends_with(".pdf"));
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let (status, body) = get_json(router, "/list_pdfs").await;
    assert_eq!(status, StatusCode::OK);
    let files = body["pdf_files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0]
        .as_str()
        .unwrap()
        .starts_with("search_results_rust_"));
}

#[tokio::test]
async fn test_list_pdfs_when_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not a pdf").unwrap();
    let provider = Arc::new(StaticProvider::new(""));
    let router = app(pipeline_with(provider, dir.path()));

    let (status, body) = get_json(router, "/list_pdfs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No PDFs found.");
}

#[tokio::test]
async fn test_webscrape_session_unavailable_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(StaticProvider::unavailable());
    let router = app(pipeline_with(provider, dir.path()));

    let (status, body) = get_json(router, "/webscrape?query=rust").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("An error occurred:"));
}
