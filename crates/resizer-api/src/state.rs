//! Application state
//!
//! Immutable per process: configuration plus the pipeline, which owns the
//! shared HTTP client. Nothing here is mutated by requests.

use crate::services::{RemoteFetcher, ResizePipeline};
use resizer_core::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub pipeline: ResizePipeline,
}

impl AppState {
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        let fetcher = RemoteFetcher::new(http_client, config.max_fetch_bytes);
        let pipeline = ResizePipeline::new(
            fetcher,
            config.request_timeout(),
            config.max_output_pixels,
        );
        Self { config, pipeline }
    }
}
