//! Image processing module
//!
//! - JPEG decode/encode (codec)
//! - Exact-dimension resampling (resize)

pub mod codec;
pub mod resize;

pub use codec::JpegCodec;
pub use resize::ImageResize;
