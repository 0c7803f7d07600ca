//! API constants

/// Path of the resize endpoint
pub const IMAGE_RESIZE_PATH: &str = "/api/image.jpg";

/// Request/response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub use resizer_core::constants::CONTENT_TYPE_JPEG;
