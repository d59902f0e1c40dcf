//! Backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// OpenAPI document re-exported for Swagger UI and tooling.
pub use doc::ApiDoc;
