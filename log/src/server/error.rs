//! Mapping of [`Error`] onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::Error;

/// Error response wrapper for converting [`Error`] to HTTP responses.
///
/// The body is the error's display text as `text/plain`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::OffsetNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "request failed");
        }
        (status, self.0.to_string()).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}
