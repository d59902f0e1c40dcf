//! SQLite persistence adapters using Diesel ORM.
//!
//! The concrete implementation of the domain's message store port lives
//! here, backed by SQLite through Diesel with `r2d2` pooling.
//!
//! # Architecture
//!
//! - Adapters stay thin: they translate rows to domain types and back,
//!   with no business rules of their own.
//! - Row structs (`models.rs`) and the table DSL (`schema.rs`) never leak
//!   past this module.
//! - SQLite calls run inside `tokio::task::spawn_blocking` on connections
//!   checked out of the `r2d2` pool.
//! - Every database failure maps onto the domain's message store errors.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselMessageStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("messages.db"))?;
//! pool.run_migrations()?;
//! let store = DieselMessageStore::new(pool);
//! ```

mod diesel_message_store;
mod models;
mod pool;
mod schema;

pub use diesel_message_store::DieselMessageStore;
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
