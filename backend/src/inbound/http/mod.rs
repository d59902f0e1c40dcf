//! REST endpoints and HTTP-level policies for the message board API.

pub mod cors;
pub mod error;
pub mod health;
pub mod login;
pub mod messages;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
