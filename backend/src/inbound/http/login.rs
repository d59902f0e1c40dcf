//! Login API handler.
//!
//! ```text
//! POST /api/login {"username":"User A","password":"Pwd&1234"}
//! ```
//!
//! Responses are the fixed texts `Login Successful` (200) and
//! `Invalid credentials` (401); clients match on them verbatim.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::LoginCredentials;
use crate::inbound::http::state::HttpState;

const LOGIN_ACCEPTED_BODY: &str = "Login Successful";
const LOGIN_REJECTED_BODY: &str = "Invalid credentials";

/// Login request body for `POST /api/login`.
///
/// Both fields are optional at the serde level: a request missing either one
/// is treated as a failed login rather than a malformed request.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Check a username/password pair against the provisioned accounts.
///
/// Credentials are compared verbatim. Missing fields, unknown usernames and
/// wrong passwords all produce the same 401 so callers cannot probe which
/// usernames exist.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login accepted", body = String, content_type = "text/plain"),
        (status = 401, description = "Invalid credentials", body = String, content_type = "text/plain")
    ),
    tags = ["login"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(state: web::Data<HttpState>, payload: web::Json<LoginRequest>) -> HttpResponse {
    let LoginRequest { username, password } = payload.into_inner();
    let (Some(username), Some(password)) = (username, password) else {
        debug!("login rejected: missing credential fields");
        return rejected_response();
    };

    let credentials = LoginCredentials::new(username, password);
    if state
        .credentials
        .verify(credentials.username(), credentials.password())
    {
        HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(LOGIN_ACCEPTED_BODY)
    } else {
        debug!(username = %credentials.username(), "login rejected");
        rejected_response()
    }
}

fn rejected_response() -> HttpResponse {
    HttpResponse::Unauthorized()
        .content_type(ContentType::plaintext())
        .body(LOGIN_REJECTED_BODY)
}
