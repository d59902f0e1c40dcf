//! Shared cross-origin policy for the `/api` scope.
//!
//! Browser clients are served from arbitrary origins, so the API scope
//! answers preflight requests permissively rather than pinning a deploy-time
//! origin list.

use actix_cors::Cors;

/// Methods cross-origin callers may use against the `/api` scope.
const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];

/// Build the permissive CORS middleware applied to every `/api` route.
///
/// Responses carry a wildcard `Access-Control-Allow-Origin` instead of
/// echoing the caller's origin, which also rules out credentialed requests.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
}
