//! Message service: timestamp assignment and latest-window reads.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{MessageStore, MessageStoreError};
use crate::domain::{Error, Message, MessageContent, MessageDraft};

/// Number of messages returned by [`MessageService::list_recent_messages`].
pub const RECENT_MESSAGES_LIMIT: u32 = 10;

/// Application service coordinating message writes and reads.
///
/// Stateless: every call delegates to the store, with the one value-added
/// step of stamping drafts with the current instant. Content validation is
/// the inbound layer's job; the [`MessageContent`] parameter carries proof.
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
    clock: Arc<dyn Clock>,
}

impl MessageService {
    /// Create a service over the given store and clock.
    pub fn new(store: Arc<dyn MessageStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Stamp validated content with the current instant and persist it.
    ///
    /// Returns the stored message, id included.
    pub async fn post_message(&self, content: MessageContent) -> Result<Message, Error> {
        let draft = MessageDraft::new(content, self.clock.utc());
        self.store.insert(&draft).await.map_err(map_store_error)
    }

    /// Return the newest messages, most recent first.
    pub async fn list_recent_messages(&self) -> Result<Vec<Message>, Error> {
        self.store
            .fetch_latest(RECENT_MESSAGES_LIMIT)
            .await
            .map_err(map_store_error)
    }
}

fn map_store_error(error: MessageStoreError) -> Error {
    match error {
        MessageStoreError::Connection { message } => Error::service_unavailable(message),
        MessageStoreError::Query { message } => Error::internal(message),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for timestamp assignment and error mapping.

    use chrono::{DateTime, Local, TimeZone, Utc};
    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockMessageStore;
    use crate::domain::{ErrorCode, MessageId};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn fixture_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 20, 9, 15, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn fixture_clock() -> Arc<dyn Clock> {
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        })
    }

    fn content(text: &str) -> MessageContent {
        MessageContent::new(text).expect("valid content")
    }

    fn stored(draft: &MessageDraft) -> Message {
        Message::new(
            MessageId::new("stored-1").expect("valid id"),
            draft.content().clone(),
            draft.timestamp(),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn post_message_stamps_the_clock_instant() {
        let mut store = MockMessageStore::new();
        store
            .expect_insert()
            .withf(|draft| draft.timestamp() == fixture_timestamp())
            .returning(|draft| Ok(stored(draft)));
        let service = MessageService::new(Arc::new(store), fixture_clock());

        let message = service
            .post_message(content("hello"))
            .await
            .expect("post succeeds");

        assert_eq!(message.content().as_ref(), "hello");
        assert_eq!(message.timestamp(), fixture_timestamp());
    }

    #[rstest]
    #[tokio::test]
    async fn list_recent_messages_requests_the_fixed_window() {
        let mut store = MockMessageStore::new();
        store
            .expect_fetch_latest()
            .with(eq(RECENT_MESSAGES_LIMIT))
            .returning(|_| Ok(Vec::new()));
        let service = MessageService::new(Arc::new(store), fixture_clock());

        let messages = service
            .list_recent_messages()
            .await
            .expect("list succeeds");

        assert!(messages.is_empty());
    }

    #[rstest]
    #[case(MessageStoreError::connection("database unavailable"), ErrorCode::ServiceUnavailable)]
    #[case(MessageStoreError::query("insert rejected"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn post_message_maps_store_errors(
        #[case] store_error: MessageStoreError,
        #[case] expected: ErrorCode,
    ) {
        let mut store = MockMessageStore::new();
        store
            .expect_insert()
            .returning(move |_| Err(store_error.clone()));
        let service = MessageService::new(Arc::new(store), fixture_clock());

        let error = service
            .post_message(content("hello"))
            .await
            .expect_err("post should fail");

        assert_eq!(error.code(), expected);
    }

    #[rstest]
    #[case(MessageStoreError::connection("database unavailable"), ErrorCode::ServiceUnavailable)]
    #[case(MessageStoreError::query("select rejected"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn list_recent_messages_maps_store_errors(
        #[case] store_error: MessageStoreError,
        #[case] expected: ErrorCode,
    ) {
        let mut store = MockMessageStore::new();
        store
            .expect_fetch_latest()
            .returning(move |_| Err(store_error.clone()));
        let service = MessageService::new(Arc::new(store), fixture_clock());

        let error = service
            .list_recent_messages()
            .await
            .expect_err("list should fail");

        assert_eq!(error.code(), expected);
    }
}
