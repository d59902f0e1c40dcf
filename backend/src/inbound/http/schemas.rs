//! OpenAPI schemas for the types the REST API exposes.
//!
//! The domain deliberately does not derive `ToSchema`, so the wrapper types
//! here register the documentation shapes with utoipa instead. Each wrapper
//! mirrors its domain counterpart field for field while keeping framework
//! concerns inside the inbound adapter.

use utoipa::ToSchema;

/// Schema wrapper for [`crate::domain::ErrorCode`].
///
/// The failure categories reported in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The caller sent something malformed or invalid.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The caller could not be authenticated.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// A backing service could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Something failed inside the service.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Schema wrapper for [`crate::domain::Error`].
///
/// The JSON error envelope: a machine-readable code plus a human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "referenced only by the utoipa derive"
)]
pub struct ErrorSchema {
    /// Machine-readable failure category.
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    /// Human-readable description of the failure.
    #[schema(example = "database unavailable")]
    message: String,
}

/// Schema wrapper for [`crate::domain::Message`].
///
/// A stored board message with its engine-assigned identifier and server-side
/// timestamp.
#[derive(ToSchema)]
#[schema(as = crate::domain::Message)]
#[expect(
    dead_code,
    reason = "referenced only by the utoipa derive"
)]
pub struct MessageSchema {
    /// Engine-assigned opaque identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Message text exactly as posted, up to 250 characters.
    #[schema(value_type = String, example = "hello board")]
    content: String,
    /// Server-assigned creation instant in RFC 3339 form.
    #[schema(value_type = String, example = "2026-08-20T12:34:56Z")]
    timestamp: String,
}
