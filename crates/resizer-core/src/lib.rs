//! Resizer Core Library
//!
//! This crate provides the request models, error taxonomy and configuration
//! shared by the processing and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::SizeSpec;
