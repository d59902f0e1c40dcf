//! HTTP mapping for domain errors.
//!
//! Handlers return domain [`Error`] values; the [`ResponseError`] impl here
//! turns them into status codes and JSON bodies so the domain layer never
//! learns about HTTP.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Result alias used by the HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Body text substituted for internal diagnostics.
const REDACTED_MESSAGE: &str = "Internal server error";

/// Strip server-side detail from errors that must stay opaque to clients.
fn client_payload(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => Error::internal(REDACTED_MESSAGE),
        _ => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(client_payload(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Framework failures carry internals; log them and answer opaquely.
        error!(error = %err, "actix error mapped to a domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}
