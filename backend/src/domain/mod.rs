//! Domain primitives and services.
//!
//! Purpose: define strongly typed domain entities, the ports adapters
//! implement, and the application services coordinating them. Types are
//! immutable; invariants and serialisation contracts live in each type's
//! Rustdoc.
//!
//! Public surface:
//! - [`Message`], [`MessageContent`], [`MessageDraft`], [`MessageId`] — the
//!   message aggregate and its validated parts.
//! - [`CredentialStore`], [`LoginCredentials`] — static authentication.
//! - [`MessageService`] — timestamp assignment and latest-window reads.
//! - [`Error`] / [`ErrorCode`] — transport-agnostic failure payload.

pub mod credentials;
pub mod error;
pub mod message;
pub mod message_service;
pub mod ports;

pub use self::credentials::{CredentialStore, LoginCredentials};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::message::{
    MESSAGE_CONTENT_MAX, Message, MessageContent, MessageDraft, MessageId, MessageValidationError,
};
pub use self::message_service::{MessageService, RECENT_MESSAGES_LIMIT};
