//! Resizer API Library
//!
//! This crate provides the HTTP handler, the remote fetcher and resize
//! pipeline behind it, middleware, and application setup.

pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use services::{PipelineStage, RemoteFetcher, ResizePipeline};
pub use state::AppState;
