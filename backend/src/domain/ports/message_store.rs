//! Port for message persistence and latest-window reads.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Message, MessageDraft, MessageId};

/// Errors raised by message store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageStoreError {
    /// The backing store could not be reached.
    #[error("message store connection failed: {message}")]
    Connection { message: String },

    /// The store was reachable but the operation failed.
    #[error("message store query failed: {message}")]
    Query { message: String },
}

impl MessageStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing messages and reading the newest slice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a draft and return the stored message with its assigned id.
    async fn insert(&self, draft: &MessageDraft) -> Result<Message, MessageStoreError>;

    /// Read up to `limit` messages ordered newest first.
    ///
    /// Ties between equal timestamps fall back on the store's own ordering.
    async fn fetch_latest(&self, limit: u32) -> Result<Vec<Message>, MessageStoreError>;
}

/// In-memory implementation for tests and handler wiring without a database.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    messages: Mutex<Vec<Message>>,
}

impl InMemoryMessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn insert(&self, draft: &MessageDraft) -> Result<Message, MessageStoreError> {
        let id = MessageId::new(Uuid::new_v4().to_string())
            .map_err(|err| MessageStoreError::query(err.to_string()))?;
        let message = Message::new(id, draft.content().clone(), draft.timestamp());

        let mut messages = self
            .messages
            .lock()
            .map_err(|_| MessageStoreError::query("message store lock poisoned"))?;
        messages.push(message.clone());
        Ok(message)
    }

    async fn fetch_latest(&self, limit: u32) -> Result<Vec<Message>, MessageStoreError> {
        let messages = self
            .messages
            .lock()
            .map_err(|_| MessageStoreError::query("message store lock poisoned"))?;

        let mut ordered = messages.clone();
        // Stable sort: equal timestamps keep insertion order.
        ordered.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        ordered.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(ordered)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the in-memory store.

    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::MessageContent;

    fn draft(content: &str, minute: u32) -> MessageDraft {
        MessageDraft::new(
            MessageContent::new(content).expect("valid content"),
            Utc.with_ymd_and_hms(2026, 8, 20, 12, minute, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryMessageStore::new();
        let first = store.insert(&draft("one", 0)).await.expect("insert one");
        let second = store.insert(&draft("two", 1)).await.expect("insert two");
        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_latest_orders_newest_first_and_respects_the_limit() {
        let store = InMemoryMessageStore::new();
        for minute in 0..5 {
            store
                .insert(&draft(&format!("message {minute}"), minute))
                .await
                .expect("insert");
        }

        let latest = store.fetch_latest(3).await.expect("fetch");
        let contents: Vec<&str> = latest.iter().map(|m| m.content().as_ref()).collect();
        assert_eq!(contents, vec!["message 4", "message 3", "message 2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_latest_returns_everything_when_under_the_limit() {
        let store = InMemoryMessageStore::new();
        store.insert(&draft("only", 0)).await.expect("insert");

        let latest = store.fetch_latest(10).await.expect("fetch");
        assert_eq!(latest.len(), 1);
    }
}
