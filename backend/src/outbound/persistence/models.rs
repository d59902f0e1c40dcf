//! Diesel row structs private to the persistence layer.
//!
//! The domain never sees these types; they exist to satisfy Diesel's derive
//! machinery for reads and inserts against the `messages` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::messages;
use crate::domain::{Message, MessageContent, MessageId, MessageValidationError};

/// Row struct for reading from the messages table.
///
/// Timestamps are stored zone-less; the adapter reattaches UTC when mapping
/// back to the domain.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct MessageRow {
    pub id: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl TryFrom<MessageRow> for Message {
    type Error = MessageValidationError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let MessageRow {
            id,
            content,
            timestamp,
        } = row;

        Ok(Message::new(
            MessageId::new(id)?,
            MessageContent::new(content)?,
            timestamp.and_utc(),
        ))
    }
}

/// Insertable struct for creating new message records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub(crate) struct NewMessageRow<'a> {
    pub id: &'a str,
    pub content: &'a str,
    pub timestamp: NaiveDateTime,
}
