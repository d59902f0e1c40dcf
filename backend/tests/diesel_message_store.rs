//! Integration tests for `DieselMessageStore`.
//!
//! This suite validates message persistence and the latest-window read path
//! against a SQLite database file in a temporary directory, migrations
//! included.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use diesel::RunQueryDsl;
use tempfile::TempDir;

use backend::domain::{MessageContent, MessageDraft};
use backend::domain::ports::{MessageStore, MessageStoreError};
use backend::outbound::persistence::{DbPool, DieselMessageStore, PoolConfig};

struct TestContext {
    pool: DbPool,
    store: DieselMessageStore,
    database_url: String,
    _dir: TempDir,
}

fn setup_store() -> TestContext {
    let dir = tempfile::tempdir().expect("create temp dir");
    let database_url = dir
        .path()
        .join("messages.sqlite3")
        .to_string_lossy()
        .into_owned();
    let pool = DbPool::new(PoolConfig::new(&database_url)).expect("build pool");
    pool.run_migrations().expect("run migrations");
    let store = DieselMessageStore::new(pool.clone());
    TestContext {
        pool,
        store,
        database_url,
        _dir: dir,
    }
}

fn fixture_timestamp(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 20, 12, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn draft(content: &str, minute: u32) -> MessageDraft {
    let content = MessageContent::new(content).expect("valid content");
    MessageDraft::new(content, fixture_timestamp(minute))
}

#[tokio::test]
async fn insert_returns_the_stored_message() {
    let context = setup_store();

    let stored = context
        .store
        .insert(&draft("  kept verbatim  ", 0))
        .await
        .expect("insert message");

    assert!(!stored.id().as_ref().is_empty());
    assert_eq!(stored.content().as_ref(), "  kept verbatim  ");
    assert_eq!(stored.timestamp(), fixture_timestamp(0));

    let fetched = context
        .store
        .fetch_latest(10)
        .await
        .expect("fetch messages");
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id(), stored.id());
    assert_eq!(fetched[0].timestamp(), fixture_timestamp(0));
}

#[tokio::test]
async fn fetch_latest_orders_newest_first_and_caps_the_window() {
    let context = setup_store();

    for minute in 0..12 {
        context
            .store
            .insert(&draft(&format!("message {minute}"), minute))
            .await
            .expect("insert message");
    }

    let fetched = context
        .store
        .fetch_latest(10)
        .await
        .expect("fetch messages");
    assert_eq!(fetched.len(), 10);
    assert_eq!(fetched[0].content().as_ref(), "message 11");
    assert_eq!(fetched[9].content().as_ref(), "message 2");

    let ids: HashSet<String> = fetched
        .iter()
        .map(|message| message.id().as_ref().to_owned())
        .collect();
    assert_eq!(ids.len(), 10, "identifiers must be unique");

    let smaller = context.store.fetch_latest(5).await.expect("fetch messages");
    assert_eq!(smaller.len(), 5);
    assert_eq!(smaller[0].content().as_ref(), "message 11");
}

#[tokio::test]
async fn fetch_latest_returns_everything_when_under_populated() {
    let context = setup_store();

    for minute in 0..3 {
        context
            .store
            .insert(&draft(&format!("message {minute}"), minute))
            .await
            .expect("insert message");
    }

    let fetched = context
        .store
        .fetch_latest(10)
        .await
        .expect("fetch messages");
    assert_eq!(fetched.len(), 3);
}

#[tokio::test]
async fn messages_with_equal_timestamps_are_all_returned() {
    let context = setup_store();

    context
        .store
        .insert(&draft("tied one", 5))
        .await
        .expect("insert message");
    context
        .store
        .insert(&draft("tied two", 5))
        .await
        .expect("insert message");

    let fetched = context
        .store
        .fetch_latest(10)
        .await
        .expect("fetch messages");
    let contents: HashSet<&str> = fetched
        .iter()
        .map(|message| message.content().as_ref())
        .collect();
    assert_eq!(contents, HashSet::from(["tied one", "tied two"]));
}

#[tokio::test]
async fn rows_survive_a_pool_reopen() {
    let context = setup_store();

    context
        .store
        .insert(&draft("durable", 0))
        .await
        .expect("insert message");
    drop(context.store);
    drop(context.pool);

    let reopened = DbPool::new(PoolConfig::new(&context.database_url)).expect("reopen pool");
    reopened.run_migrations().expect("rerun migrations");
    let store = DieselMessageStore::new(reopened);

    let fetched = store.fetch_latest(10).await.expect("fetch messages");
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].content().as_ref(), "durable");
}

#[tokio::test]
async fn missing_table_maps_to_a_query_error() {
    let context = setup_store();

    let mut connection = context.pool.get().expect("checkout connection");
    diesel::sql_query("DROP TABLE messages")
        .execute(&mut connection)
        .expect("drop table succeeds");
    drop(connection);

    let error = context
        .store
        .insert(&draft("orphaned", 0))
        .await
        .expect_err("insert should fail when table is missing");
    assert!(matches!(error, MessageStoreError::Query { .. }));
}
