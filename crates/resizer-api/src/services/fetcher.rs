//! Remote image fetcher
//!
//! Downloads caller-supplied URLs with the application's HTTP client and
//! classifies every failure into an [`AppError`]. The body is read under a hard
//! byte cap; anything past the cap is never read.

use anyhow::Context;
use bytes::{Bytes, BytesMut};
use reqwest::{StatusCode, Url};
use resizer_core::AppError;

const INITIAL_BUFFER_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct RemoteFetcher {
    client: reqwest::Client,
    max_bytes: usize,
}

impl RemoteFetcher {
    pub fn new(client: reqwest::Client, max_bytes: usize) -> Self {
        Self { client, max_bytes }
    }

    /// GET `url` and return at most `max_bytes` of its body.
    ///
    /// - malformed or non-HTTP(S) URL: [`AppError::BadRequest`]
    /// - transport failure or body read failure: [`AppError::Internal`]
    /// - upstream 404: [`AppError::NotFound`]
    /// - any other upstream status >= 400: [`AppError::Unclassified`]
    ///
    /// Dropping the returned future aborts the request and releases the
    /// connection.
    #[tracing::instrument(skip(self), fields(max_bytes = self.max_bytes))]
    pub async fn fetch(&self, url: &str) -> Result<Bytes, AppError> {
        let request = self.prepare_request(url)?;

        let response = self
            .client
            .execute(request)
            .await
            .context("doing request")
            .map_err(AppError::Internal)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Remote responded");

        if status.as_u16() < 400 {
            return read_capped(response, self.max_bytes).await;
        }

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found("image not found"));
        }

        Err(AppError::unclassified(format!("invalid status: {}", status)))
    }

    fn prepare_request(&self, url: &str) -> Result<reqwest::Request, AppError> {
        let parsed = Url::parse(url)
            .with_context(|| format!("parsing url {:?}", url))
            .map_err(AppError::BadRequest)?;

        // Only allow HTTP/HTTPS
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::bad_request(format!(
                "unsupported url scheme: {}",
                parsed.scheme()
            )));
        }

        self.client
            .get(parsed)
            .build()
            .context("preparing request")
            .map_err(AppError::BadRequest)
    }
}

/// Read the body chunk by chunk until EOF or until `max_bytes` are buffered.
/// Reaching the cap is not an error; the remainder is dropped with the response.
async fn read_capped(mut response: reqwest::Response, max_bytes: usize) -> Result<Bytes, AppError> {
    let capacity = response
        .content_length()
        .map_or(INITIAL_BUFFER_BYTES, |len| len as usize)
        .min(max_bytes);
    let mut buf = BytesMut::with_capacity(capacity);

    while let Some(chunk) = response
        .chunk()
        .await
        .context("reading body")
        .map_err(AppError::Internal)?
    {
        let remaining = max_bytes - buf.len();
        if chunk.len() >= remaining {
            buf.extend_from_slice(&chunk[..remaining]);
            tracing::debug!(max_bytes, "Response body reached the byte cap");
            break;
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf.freeze())
}
