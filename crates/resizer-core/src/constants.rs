//! Shared constants

/// Hard ceiling on bytes read from a remote image response (20 MiB).
pub const MAX_PROXY_SIZE_BYTES: usize = 20 * 1024 * 1024;

/// Default ceiling on `width * height` of a requested output raster (100 MP).
pub const DEFAULT_MAX_OUTPUT_PIXELS: u64 = 100_000_000;

/// Default listen address of the API server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:9777";

/// Content type of every successful response body.
pub const CONTENT_TYPE_JPEG: &str = "image/jpeg";
