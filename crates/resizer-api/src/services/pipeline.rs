//! Resize pipeline
//!
//! Parse size -> fetch -> decode -> resize -> encode, strictly in that order.
//! The first failing stage ends the request; nothing is retried.

use std::fmt;
use std::time::Duration;

use anyhow::Context;
use bytes::Bytes;
use resizer_core::{AppError, SizeSpec};
use resizer_processing::{ImageResize, JpegCodec};

use super::fetcher::RemoteFetcher;

/// Last stage a request completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Start,
    SizeParsed,
    Fetched,
    Decoded,
    Resized,
    Encoded,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Start => "start",
            PipelineStage::SizeParsed => "size_parsed",
            PipelineStage::Fetched => "fetched",
            PipelineStage::Decoded => "decoded",
            PipelineStage::Resized => "resized",
            PipelineStage::Encoded => "encoded",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct ResizePipeline {
    fetcher: RemoteFetcher,
    timeout: Duration,
    max_output_pixels: u64,
}

impl ResizePipeline {
    pub fn new(fetcher: RemoteFetcher, timeout: Duration, max_output_pixels: u64) -> Self {
        Self {
            fetcher,
            timeout,
            max_output_pixels,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_output_pixels(&self) -> u64 {
        self.max_output_pixels
    }

    /// Run every stage for one request and return the encoded JPEG.
    ///
    /// The whole run is bounded by the pipeline timeout; when it elapses the
    /// request fails with [`AppError::Internal`] and no further stage starts.
    /// A fetch in flight is aborted. A decode, resize or encode already running
    /// on the blocking pool cannot be interrupted: it runs to completion and
    /// its result is discarded.
    pub async fn run(&self, size: &str, url: &str) -> Result<Bytes, AppError> {
        let mut stage = PipelineStage::Start;

        let outcome =
            tokio::time::timeout(self.timeout, self.run_stages(size, url, &mut stage)).await;
        let result = match outcome {
            Ok(result) => result,
            Err(elapsed) => Err(AppError::Internal(
                anyhow::Error::new(elapsed)
                    .context(format!("resize pipeline timed out after {:?}", self.timeout)),
            )),
        };

        match &result {
            Ok(body) => {
                tracing::debug!(
                    stage = %stage,
                    output_bytes = body.len(),
                    "Resize pipeline finished"
                );
            }
            Err(e) => {
                tracing::debug!(
                    stage = %stage,
                    error_type = e.error_type(),
                    "Resize pipeline aborted"
                );
            }
        }

        result
    }

    async fn run_stages(
        &self,
        size: &str,
        url: &str,
        stage: &mut PipelineStage,
    ) -> Result<Bytes, AppError> {
        let target = SizeSpec::parse(size)?;
        check_output_pixels(target, self.max_output_pixels)?;
        *stage = PipelineStage::SizeParsed;

        let data = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| e.context("fetching remote image"))?;
        *stage = PipelineStage::Fetched;

        let img = run_blocking(move || JpegCodec::decode(&data)).await?;
        *stage = PipelineStage::Decoded;

        let resized = run_blocking(move || Ok(ImageResize::resize_exact(&img, target))).await?;
        *stage = PipelineStage::Resized;

        let encoded = run_blocking(move || JpegCodec::encode(&resized)).await?;
        *stage = PipelineStage::Encoded;

        Ok(encoded)
    }
}

/// Reject targets whose raster would exceed `max_pixels`. Runs before the
/// fetch so an oversized request never allocates.
fn check_output_pixels(target: SizeSpec, max_pixels: u64) -> Result<(), AppError> {
    if target.pixel_count() > max_pixels {
        return Err(AppError::bad_request(format!(
            "requested size {} is {} pixels, limit is {}",
            target,
            target.pixel_count(),
            max_pixels
        )));
    }
    Ok(())
}

/// Run CPU-bound work on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .context("blocking task failed")
        .map_err(AppError::Internal)?
}
