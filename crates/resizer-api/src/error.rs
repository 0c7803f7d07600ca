//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. The response carries only the
//! status and its canonical reason phrase as a plain body; the error chain is
//! written to the logs and never sent to the client.

use axum::{
    body::Body,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use resizer_core::{AppError, ErrorMetadata, LogLevel};

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: `AppError` lives in resizer-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// A query string that cannot be deserialized is the caller's fault.
impl From<QueryRejection> for HttpAppError {
    fn from(rejection: QueryRejection) -> Self {
        HttpAppError(AppError::BadRequest(anyhow::anyhow!(
            "invalid query string: {}",
            rejection.body_text()
        )))
    }
}

impl HttpAppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn log_error(error: &AppError, status: StatusCode) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    let cause = format!("{:#}", error.cause());
    let status = status.as_u16();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %cause, error_type, error_code, status, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %cause, error_type, error_code, status, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %cause, error_type, error_code, status, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = self.status();
        log_error(&self.0, status);

        let reason = status.canonical_reason().unwrap_or("Error");
        let mut response = Response::new(Body::from(reason));
        *response.status_mut() = status;
        response
    }
}
