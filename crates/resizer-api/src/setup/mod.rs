//! Application setup and initialization

pub mod http_client;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use resizer_core::Config;
use std::sync::Arc;

/// Initialize the application: HTTP client, state and routes
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    let http_client = http_client::build_http_client(&config)?;
    let state = Arc::new(AppState::new(config, http_client));
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
