//! Traits the domain expects its adapters to implement, plus test doubles.

mod message_store;

#[cfg(test)]
pub use message_store::MockMessageStore;
pub use message_store::{InMemoryMessageStore, MessageStore, MessageStoreError};
