//! Messages API handlers.
//!
//! ```text
//! POST /api/messages {"content":"hello"}
//! GET  /api/messages
//! ```
//!
//! Posting returns the stored message as JSON. Validation failures answer
//! with a bare 400 and no body; only storage failures use the JSON error
//! envelope.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Message, MessageContent};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Message creation body for `POST /api/messages`.
///
/// `content` is optional at the serde level so an absent field is rejected
/// by the handler's own validation instead of the JSON extractor.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub content: Option<String>,
}

/// Store a new message stamped with the server clock.
///
/// Content is kept verbatim, surrounding whitespace included; the limit of
/// 250 is counted in characters, not bytes.
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 200, description = "Stored message", body = crate::inbound::http::schemas::MessageSchema),
        (status = 400, description = "Content missing, blank or longer than 250 characters"),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Storage unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "createMessage"
)]
#[post("/messages")]
pub async fn create_message(
    state: web::Data<HttpState>,
    payload: web::Json<CreateMessageRequest>,
) -> ApiResult<HttpResponse> {
    let Some(content) = payload.into_inner().content else {
        debug!("message rejected: missing content field");
        return Ok(HttpResponse::BadRequest().finish());
    };

    let content = match MessageContent::new(content) {
        Ok(content) => content,
        Err(err) => {
            debug!(error = %err, "message rejected");
            return Ok(HttpResponse::BadRequest().finish());
        }
    };

    let message = state.messages.post_message(content).await?;
    Ok(HttpResponse::Ok().json(message))
}

/// List the latest messages, newest first.
#[utoipa::path(
    get,
    path = "/api/messages",
    responses(
        (status = 200, description = "Latest messages, newest first", body = [crate::inbound::http::schemas::MessageSchema]),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Storage unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "listMessages"
)]
#[get("/messages")]
pub async fn list_messages(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Message>>> {
    let messages = state.messages.list_recent_messages().await?;
    Ok(web::Json(messages))
}
