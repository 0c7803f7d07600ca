//! JPEG codec

use std::borrow::Cow;

use anyhow::Context;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat};
use resizer_core::AppError;

pub struct JpegCodec;

impl JpegCodec {
    /// Decode JPEG bytes into a raster.
    ///
    /// The format is forced rather than guessed, so any non-JPEG input fails
    /// with [`AppError::UnsupportedMediaType`].
    pub fn decode(data: &[u8]) -> Result<DynamicImage, AppError> {
        let img = image::load_from_memory_with_format(data, ImageFormat::Jpeg)
            .context("decoding jpeg")
            .map_err(AppError::UnsupportedMediaType)?;

        let (width, height) = img.dimensions();
        tracing::debug!(width, height, input_bytes = data.len(), "Decoded JPEG");

        Ok(img)
    }

    /// Encode a raster as JPEG with the encoder's default quality.
    pub fn encode(img: &DynamicImage) -> Result<Bytes, AppError> {
        // JPEG has no alpha channel and only 8-bit samples
        let encodable = match img {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(img),
            other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
        };

        let (width, height) = encodable.dimensions();
        let mut buffer = Vec::with_capacity((width as usize * height as usize) / 4);
        encodable
            .write_with_encoder(JpegEncoder::new(&mut buffer))
            .context("encoding jpeg")
            .map_err(AppError::Internal)?;

        Ok(Bytes::from(buffer))
    }
}
