//! Diesel table definitions for the SQLite schema.
//!
//! Kept in lockstep with the embedded migrations; Diesel leans on these
//! definitions for compile-time query checking.

diesel::table! {
    /// Stored messages.
    ///
    /// Append-only: rows are inserted once and never updated or deleted by
    /// this service. The `id` column is the primary key (UUID v4 in text
    /// form).
    messages (id) {
        /// Primary key: identifier assigned at insert.
        id -> Text,
        /// Message body, exactly as supplied by the author.
        content -> Text,
        /// Creation instant (UTC, no zone suffix in storage).
        timestamp -> Timestamp,
    }
}
