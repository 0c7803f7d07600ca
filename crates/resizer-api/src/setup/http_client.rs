//! Outbound HTTP client
//!
//! Built once per process from [`Config`] and shared by every request through
//! [`AppState`](crate::state::AppState).

use anyhow::{Context, Result};
use resizer_core::Config;

const USER_AGENT: &str = concat!("resizer/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.fetch_timeout())
        .connect_timeout(config.fetch_connect_timeout())
        .pool_idle_timeout(config.fetch_pool_idle_timeout())
        .pool_max_idle_per_host(config.fetch_pool_max_idle_per_host)
        .build()
        .context("Failed to create HTTP client")
}
