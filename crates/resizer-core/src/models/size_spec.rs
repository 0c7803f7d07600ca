//! Requested output dimensions

use std::fmt;
use std::str::FromStr;

use anyhow::Context;

use crate::error::AppError;

/// Validated target dimensions, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeSpec {
    width: u32,
    height: u32,
}

impl SizeSpec {
    /// Parse dimensions from string format: "WxH"
    ///
    /// Fails with [`AppError::BadRequest`] unless `raw` is exactly two integers
    /// separated by a single `x`, both greater than zero.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = raw.split('x').collect();
        if parts.len() != 2 {
            return Err(AppError::bad_request(format!("invalid size: {:?}", raw)));
        }

        let width = parse_dimension(parts[0]).map_err(|e| e.context("parsing width"))?;
        let height = parse_dimension(parts[1]).map_err(|e| e.context("parsing height"))?;

        Ok(SizeSpec { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the target raster. Never overflows.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

fn parse_dimension(token: &str) -> Result<u32, AppError> {
    let value = token
        .parse::<i64>()
        .with_context(|| format!("not an integer: {:?}", token))
        .map_err(AppError::BadRequest)?;

    if value <= 0 {
        return Err(AppError::bad_request(format!(
            "dimension must be positive, got {}",
            value
        )));
    }

    u32::try_from(value)
        .with_context(|| format!("dimension too large: {}", value))
        .map_err(AppError::BadRequest)
}

impl FromStr for SizeSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeSpec::parse(s)
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
