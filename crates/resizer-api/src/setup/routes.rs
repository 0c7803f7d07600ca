//! Route configuration and setup.

use crate::constants::IMAGE_RESIZE_PATH;
use crate::handlers::image_resize::resize_image;
use crate::middleware::{request_id_middleware, RequestId};
use crate::state::AppState;
use axum::{extract::Request, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.as_str())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
        )
    });

    Router::new()
        .route(IMAGE_RESIZE_PATH, get(resize_image))
        .with_state(state)
        .layer(trace_layer)
        // Outermost, so the trace span can read the request id
        .layer(axum::middleware::from_fn(request_id_middleware))
}
