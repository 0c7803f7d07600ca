//! Configuration module
//!
//! Settings are read from the environment (and an optional `.env` file) with
//! typed defaults. The listen address can additionally be overridden from the
//! command line by the binary.

use std::env;
use std::time::Duration;

use crate::constants::{DEFAULT_LISTEN_ADDR, DEFAULT_MAX_OUTPUT_PIXELS, MAX_PROXY_SIZE_BYTES};

// Common constants
const FETCH_TIMEOUT_SECS: u64 = 30;
const FETCH_CONNECT_TIMEOUT_SECS: u64 = 10;
const FETCH_POOL_IDLE_TIMEOUT_SECS: u64 = 90;
const FETCH_POOL_MAX_IDLE_PER_HOST: usize = 16;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub environment: String,
    /// Hard cap on bytes read from a remote image response
    pub max_fetch_bytes: usize,
    /// Largest `width * height` a request may ask for
    pub max_output_pixels: u64,
    pub fetch_timeout_secs: u64,
    pub fetch_connect_timeout_secs: u64,
    pub fetch_pool_idle_timeout_secs: u64,
    pub fetch_pool_max_idle_per_host: usize,
    /// Deadline for the whole resize pipeline of one request
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            environment: "development".to_string(),
            max_fetch_bytes: MAX_PROXY_SIZE_BYTES,
            max_output_pixels: DEFAULT_MAX_OUTPUT_PIXELS,
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,
            fetch_connect_timeout_secs: FETCH_CONNECT_TIMEOUT_SECS,
            fetch_pool_idle_timeout_secs: FETCH_POOL_IDLE_TIMEOUT_SECS,
            fetch_pool_max_idle_per_host: FETCH_POOL_MAX_IDLE_PER_HOST,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or(defaults.environment);

        let config = Config {
            listen_addr: lookup("LISTEN_ADDR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.listen_addr),
            environment,
            max_fetch_bytes: parse_or("MAX_FETCH_BYTES", &lookup, defaults.max_fetch_bytes)?,
            max_output_pixels: parse_or(
                "MAX_OUTPUT_PIXELS",
                &lookup,
                defaults.max_output_pixels,
            )?,
            fetch_timeout_secs: parse_or("FETCH_TIMEOUT_SECS", &lookup, defaults.fetch_timeout_secs)?,
            fetch_connect_timeout_secs: parse_or(
                "FETCH_CONNECT_TIMEOUT_SECS",
                &lookup,
                defaults.fetch_connect_timeout_secs,
            )?,
            fetch_pool_idle_timeout_secs: parse_or(
                "FETCH_POOL_IDLE_TIMEOUT_SECS",
                &lookup,
                defaults.fetch_pool_idle_timeout_secs,
            )?,
            fetch_pool_max_idle_per_host: parse_or(
                "FETCH_POOL_MAX_IDLE_PER_HOST",
                &lookup,
                defaults.fetch_pool_max_idle_per_host,
            )?,
            request_timeout_secs: parse_or(
                "REQUEST_TIMEOUT_SECS",
                &lookup,
                defaults.request_timeout_secs,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_fetch_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FETCH_BYTES cannot be 0"));
        }

        if self.max_output_pixels == 0 {
            return Err(anyhow::anyhow!("MAX_OUTPUT_PIXELS cannot be 0"));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(anyhow::anyhow!("FETCH_TIMEOUT_SECS cannot be 0"));
        }

        if self.fetch_connect_timeout_secs == 0 {
            return Err(anyhow::anyhow!("FETCH_CONNECT_TIMEOUT_SECS cannot be 0"));
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS cannot be 0"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn fetch_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_connect_timeout_secs)
    }

    pub fn fetch_pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_pool_idle_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, anyhow::Error>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a valid number, got {:?}", key, raw)),
        None => Ok(default),
    }
}
