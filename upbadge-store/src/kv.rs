//! The key-value store abstraction.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;

/// Abstract get/put-with-TTL store.
///
/// Values are structured JSON records. No transactions, no multi-key
/// atomicity: the only guarantee is single-key last-write-wins. A `put` with
/// a TTL lets the store reclaim the entry after the TTL elapses; the
/// engine's freshness windows remain the primary staleness authority, the
/// TTL is just an outer reclamation bound.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value at `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Writes `value` at `key`, optionally bounded by a TTL.
    async fn put(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<(), StoreError>;
}

/// Reads and deserializes a typed record.
pub async fn get_record<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Serializes and writes a typed record.
pub async fn put_record<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    record: &T,
    ttl: Option<Duration>,
) -> Result<(), StoreError> {
    let value = serde_json::to_value(record)?;
    store.put(key, value, ttl).await
}
