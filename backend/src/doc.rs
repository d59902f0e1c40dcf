//! OpenAPI document assembly.
//!
//! [`ApiDoc`] aggregates the OpenAPI description of the REST API:
//!
//! - **Paths**: every HTTP endpoint of the inbound layer (login, messages,
//!   health probes)
//! - **Schemas**: domain type wrappers ([`MessageSchema`], [`ErrorSchema`],
//!   [`ErrorCodeSchema`]) that document domain shapes without coupling the
//!   domain to utoipa, plus the inbound request bodies
//!
//! The generated document is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::login::LoginRequest;
use crate::inbound::http::messages::CreateMessageRequest;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, MessageSchema};

/// Top-level OpenAPI description of the message board API.
/// Debug builds serve it through Swagger UI; release builds omit the UI.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Message board backend API",
        description = "HTTP interface for posting and reading board messages.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Same origin as the API")
    ),
    paths(
        crate::inbound::http::login::login,
        crate::inbound::http::messages::create_message,
        crate::inbound::http::messages::list_messages,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        MessageSchema,
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        CreateMessageRequest
    )),
    tags(
        (name = "login", description = "Static-credential authentication"),
        (name = "messages", description = "Posting and reading board messages"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
