//! Resizer Media Processing Library
//!
//! JPEG decoding/encoding and exact-size resampling on top of the `image` crate.

pub mod image;

// Re-export commonly used types
pub use crate::image::{ImageResize, JpegCodec};
