//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle through `actix_web::web::Data`, which keeps
//! them coupled to the domain layer alone and testable without I/O.

use std::sync::Arc;

use crate::domain::{CredentialStore, MessageService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Provisioned login credentials.
    pub credentials: Arc<CredentialStore>,
    /// Message posting and retrieval use-cases.
    pub messages: MessageService,
}

impl HttpState {
    /// Bundle the dependencies handed to every worker.
    pub fn new(credentials: Arc<CredentialStore>, messages: MessageService) -> Self {
        Self {
            credentials,
            messages,
        }
    }
}
