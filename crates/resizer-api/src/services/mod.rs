//! Request-scoped services

pub mod fetcher;
pub mod pipeline;

pub use fetcher::RemoteFetcher;
pub use pipeline::{PipelineStage, ResizePipeline};
