//! SQLite-backed `MessageStore` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `MessageStore` port, providing
//! durable storage for messages. Identifiers are assigned here (UUID v4 in
//! text form) so the domain never sees an unsaved id.
//!
//! SQLite connections are synchronous; every operation runs inside
//! `tokio::task::spawn_blocking` to keep the async runtime unblocked.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{MessageStore, MessageStoreError};
use crate::domain::{Message, MessageDraft, MessageId};

use super::models::{MessageRow, NewMessageRow};
use super::pool::{DbPool, PoolError};
use super::schema::messages;

/// Diesel-backed implementation of the `MessageStore` port.
#[derive(Clone)]
pub struct DieselMessageStore {
    pool: DbPool,
}

impl DieselMessageStore {
    /// Wrap the pool in a store adapter.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain message store errors.
fn map_pool_error(error: PoolError) -> MessageStoreError {
    match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Migration { message } => MessageStoreError::connection(message),
    }
}

/// Map Diesel errors to domain message store errors.
///
/// Raw database detail is logged rather than propagated.
fn map_diesel_error(error: diesel::result::Error) -> MessageStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel call failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel call failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            MessageStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(..) => MessageStoreError::query("database error"),
        _ => MessageStoreError::query("database query error"),
    }
}

/// Convert a database row to a domain message.
fn row_to_message(row: MessageRow) -> Result<Message, MessageStoreError> {
    Message::try_from(row).map_err(|err| {
        MessageStoreError::query(format!("corrupted message row in database: {err}"))
    })
}

fn insert_blocking(pool: &DbPool, draft: &MessageDraft) -> Result<Message, MessageStoreError> {
    let mut conn = pool.get().map_err(map_pool_error)?;

    let id = Uuid::new_v4().to_string();
    let row = NewMessageRow {
        id: &id,
        content: draft.content().as_ref(),
        timestamp: draft.timestamp().naive_utc(),
    };

    diesel::insert_into(messages::table)
        .values(&row)
        .execute(&mut conn)
        .map_err(map_diesel_error)?;

    let id = MessageId::new(id)
        .map_err(|err| MessageStoreError::query(format!("generated message id rejected: {err}")))?;
    Ok(Message::new(id, draft.content().clone(), draft.timestamp()))
}

fn fetch_latest_blocking(pool: &DbPool, limit: u32) -> Result<Vec<Message>, MessageStoreError> {
    let mut conn = pool.get().map_err(map_pool_error)?;

    let rows: Vec<MessageRow> = messages::table
        .order(messages::timestamp.desc())
        .limit(i64::from(limit))
        .select(MessageRow::as_select())
        .load(&mut conn)
        .map_err(map_diesel_error)?;

    rows.into_iter().map(row_to_message).collect()
}

async fn run_blocking<T>(
    op: impl FnOnce() -> Result<T, MessageStoreError> + Send + 'static,
) -> Result<T, MessageStoreError>
where
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|err| MessageStoreError::query(format!("blocking database task failed: {err}")))?
}

#[async_trait]
impl MessageStore for DieselMessageStore {
    async fn insert(&self, draft: &MessageDraft) -> Result<Message, MessageStoreError> {
        let pool = self.pool.clone();
        let draft = draft.clone();
        run_blocking(move || insert_blocking(&pool, &draft)).await
    }

    async fn fetch_latest(&self, limit: u32) -> Result<Vec<Message>, MessageStoreError> {
        let pool = self.pool.clone();
        run_blocking(move || fetch_latest_blocking(&pool, limit)).await
    }
}
