//! Test fixtures: generated JPEGs and canned upstream routers.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use std::time::Duration;

/// Encode a gradient JPEG of the given dimensions.
pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut buf = Vec::new();
    img.write_with_encoder(JpegEncoder::new(&mut buf))
        .expect("Failed to encode test jpeg");
    buf
}

/// Upstream serving a 400x300 JPEG at `/image.jpg`.
pub fn jpeg_remote() -> Router {
    let body = create_test_jpeg(400, 300);
    Router::new().route(
        "/image.jpg",
        get(move || {
            let body = body.clone();
            async move { ([(header::CONTENT_TYPE, "image/jpeg")], body) }
        }),
    )
}

/// Upstream serving plain text at `/image.jpg`.
pub fn text_remote() -> Router {
    Router::new().route(
        "/image.jpg",
        get(|| async { ([(header::CONTENT_TYPE, "text/plain")], "hello, not an image") }),
    )
}

/// Upstream answering every request with `status`.
pub fn status_remote(status: StatusCode) -> Router {
    Router::new().fallback(move || async move { status.into_response() })
}

/// Upstream that waits `delay` before serving a JPEG.
pub fn slow_remote(delay: Duration) -> Router {
    let body = create_test_jpeg(32, 32);
    Router::new().route(
        "/image.jpg",
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                body
            }
        }),
    )
}
