//! Error types module
//!
//! Every failure in the resize pipeline is classified once, at the point where
//! it is detected, into one of the `AppError` variants. The variant decides the
//! HTTP status; the wrapped `anyhow::Error` carries the cause and its context
//! for server-side logs only.

use std::fmt;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for upstream problems outside our control
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "BAD_REQUEST")
    fn error_code(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(#[source] anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(#[source] anyhow::Error),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(#[source] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(#[source] anyhow::Error),

    /// Failure without an explicit classification, such as an upstream status
    /// other than 404. Rendered as 500.
    #[error("Unclassified error: {0}")]
    Unclassified(#[source] anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(anyhow::anyhow!(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(anyhow::anyhow!(message.into()))
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        AppError::Unclassified(anyhow::anyhow!(message.into()))
    }

    /// Attach context to the cause without changing the classification.
    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        match self {
            AppError::BadRequest(e) => AppError::BadRequest(e.context(context)),
            AppError::NotFound(e) => AppError::NotFound(e.context(context)),
            AppError::UnsupportedMediaType(e) => {
                AppError::UnsupportedMediaType(e.context(context))
            }
            AppError::Internal(e) => AppError::Internal(e.context(context)),
            AppError::Unclassified(e) => AppError::Unclassified(e.context(context)),
        }
    }

    /// The wrapped cause, including its context chain.
    pub fn cause(&self) -> &anyhow::Error {
        match self {
            AppError::BadRequest(e)
            | AppError::NotFound(e)
            | AppError::UnsupportedMediaType(e)
            | AppError::Internal(e)
            | AppError::Unclassified(e) => e,
        }
    }

    /// Variant name, used as a structured logging field.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BadRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            AppError::Internal(_) => "Internal",
            AppError::Unclassified(_) => "Unclassified",
        }
    }
}

/// Unclassified errors map to 500 explicitly rather than falling through.
impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::UnsupportedMediaType(_) => 415,
            AppError::Internal(_) | AppError::Unclassified(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Unclassified(_) => "UPSTREAM_STATUS",
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::BadRequest(_) | AppError::UnsupportedMediaType(_) => LogLevel::Debug,
            AppError::NotFound(_) | AppError::Unclassified(_) => LogLevel::Warn,
            AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::bad_request("x").http_status_code(), 400);
        assert_eq!(AppError::not_found("x").http_status_code(), 404);
        assert_eq!(
            AppError::UnsupportedMediaType(anyhow::anyhow!("x")).http_status_code(),
            415
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("x")).http_status_code(),
            500
        );
        assert_eq!(AppError::unclassified("x").http_status_code(), 500);
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            AppError::bad_request("x").error_code(),
            AppError::not_found("x").error_code(),
            AppError::UnsupportedMediaType(anyhow::anyhow!("x")).error_code(),
            AppError::Internal(anyhow::anyhow!("x")).error_code(),
            AppError::unclassified("x").error_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_cause_keeps_context_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = AppError::Internal(anyhow::Error::new(io).context("reading body"));

        let chain = format!("{:#}", err.cause());
        assert!(chain.contains("reading body"));
        assert!(chain.contains("reset by peer"));
        assert_eq!(err.error_type(), "Internal");
    }

    #[test]
    fn test_context_keeps_classification() {
        let err = AppError::not_found("image not found").context("fetching remote image");
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(
            format!("{:#}", err.cause()),
            "fetching remote image: image not found"
        );
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error;

        let err = AppError::bad_request("invalid size");
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "invalid size");
        assert_eq!(err.to_string(), "Bad request: invalid size");
    }
}
