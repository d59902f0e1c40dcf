//! Outbound adapters that satisfy the domain's ports.
//!
//! Adapters translate between domain types and whatever the backing
//! infrastructure speaks; business rules stay in the domain.
//!
//! - **persistence**: SQLite-backed message storage using Diesel ORM

pub mod persistence;
