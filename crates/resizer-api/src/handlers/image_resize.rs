use crate::constants::CONTENT_TYPE_JPEG;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::Response,
};
use resizer_core::AppError;
use serde::Deserialize;
use std::sync::Arc;

/// Missing parameters deserialize as empty strings and are rejected by the
/// pipeline like any other malformed value.
#[derive(Debug, Deserialize)]
pub struct ResizeQuery {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /api/image.jpg?size=<W>x<H>&url=<remote-image-url>`
#[tracing::instrument(
    skip(state, query),
    fields(
        size = tracing::field::Empty,
        url = tracing::field::Empty,
        max_fetch_bytes = tracing::field::Empty,
        max_output_pixels = tracing::field::Empty,
        operation = "resize_image"
    )
)]
pub async fn resize_image(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ResizeQuery>, QueryRejection>,
) -> Result<Response, HttpAppError> {
    let Query(query) = query?;

    let span = tracing::Span::current();
    span.record("size", query.size.as_str());
    span.record("url", query.url.as_str());
    span.record("max_fetch_bytes", state.config.max_fetch_bytes);
    span.record("max_output_pixels", state.config.max_output_pixels);

    let body = state.pipeline.run(&query.size, &query.url).await?;

    tracing::info!(output_bytes = body.len(), "Serving resized image");

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, CONTENT_TYPE_JPEG)
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            AppError::Internal(anyhow::Error::new(e).context("building response"))
        })?;

    Ok(response)
}
