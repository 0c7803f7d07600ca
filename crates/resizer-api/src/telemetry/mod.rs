//! Tracing initialization

use resizer_core::Config;
use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "resizer_api=debug,resizer_processing=debug,tower_http=debug";

/// Initialize console tracing. `RUST_LOG` overrides the default filter.
/// ANSI colors are disabled in production, where output goes to a log collector.
pub fn init_telemetry(config: &Config) -> Result<(), anyhow::Error> {
    let console_fmt = tracing_subscriber::fmt::layer()
        .with_ansi(!config.is_production())
        .event_format(Format::default().compact().with_target(false));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(console_fmt)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::info!(environment = %config.environment, "Tracing initialized");
    Ok(())
}
