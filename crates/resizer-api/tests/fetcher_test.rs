//! Remote fetcher integration tests against local upstream servers.

mod helpers;

use axum::{http::StatusCode, routing::get, Router};
use helpers::fixtures::status_remote;
use helpers::{spawn_remote, spawn_short_body_remote, unused_local_url};
use resizer_api::RemoteFetcher;
use resizer_core::{AppError, ErrorMetadata};

fn bytes_remote(body: &'static [u8]) -> Router {
    Router::new().route("/data", get(move || async move { body }))
}

#[tokio::test]
async fn test_body_under_cap_is_returned_whole() {
    let remote = spawn_remote(bytes_remote(b"0123456789")).await;
    let fetcher = RemoteFetcher::new(reqwest::Client::new(), 1024);

    let body = fetcher.fetch(&format!("{}/data", remote)).await.unwrap();
    assert_eq!(&body[..], b"0123456789");
}

#[tokio::test]
async fn test_body_is_truncated_at_cap() {
    let remote = spawn_remote(bytes_remote(b"abcdefghijklmnopqrstuvwxyz0123")).await;
    let fetcher = RemoteFetcher::new(reqwest::Client::new(), 10);

    let body = fetcher.fetch(&format!("{}/data", remote)).await.unwrap();
    assert_eq!(&body[..], b"abcdefghij");
}

#[tokio::test]
async fn test_body_exactly_at_cap() {
    let remote = spawn_remote(bytes_remote(b"0123456789")).await;
    let fetcher = RemoteFetcher::new(reqwest::Client::new(), 10);

    let body = fetcher.fetch(&format!("{}/data", remote)).await.unwrap();
    assert_eq!(body.len(), 10);
}

#[tokio::test]
async fn test_not_found_status() {
    let remote = spawn_remote(status_remote(StatusCode::NOT_FOUND)).await;
    let fetcher = RemoteFetcher::new(reqwest::Client::new(), 1024);

    let err = fetcher.fetch(&format!("{}/x.jpg", remote)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_other_error_status_is_unclassified() {
    let remote = spawn_remote(status_remote(StatusCode::BAD_GATEWAY)).await;
    let fetcher = RemoteFetcher::new(reqwest::Client::new(), 1024);

    let err = fetcher.fetch(&format!("{}/x.jpg", remote)).await.unwrap_err();
    assert!(matches!(err, AppError::Unclassified(_)));
    assert_eq!(err.error_code(), "UPSTREAM_STATUS");
    assert!(format!("{:#}", err.cause()).contains("502"));
}

#[tokio::test]
async fn test_connection_refused_is_internal() {
    let fetcher = RemoteFetcher::new(reqwest::Client::new(), 1024);

    let err = fetcher.fetch(&unused_local_url().await).await.unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
    assert_eq!(err.http_status_code(), 500);
}

#[tokio::test]
async fn test_body_cut_short_below_cap_is_internal() {
    let url = spawn_short_body_remote().await;
    let fetcher = RemoteFetcher::new(reqwest::Client::new(), 1024);

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert!(matches!(err, AppError::Internal(_)), "got {:?}", err);
    assert!(format!("{:#}", err.cause()).contains("reading body"));
}
