//! In-process key-value store with TTL expiry.

use crate::KeyValue;
use padauk_error::PadaukResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Stored value with optional expiration.
#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    created_at: Instant,
    ttl: Option<Duration>,
}

impl StoredEntry {
    fn is_expired(&self) -> bool {
        match self.ttl {
            Some(ttl) => self.created_at.elapsed() > ttl,
            None => false,
        }
    }
}

/// In-process key-value store.
///
/// Entries expire passively: an expired key is removed the next time it is
/// read (or during [`MemoryStore::cleanup_expired`]), never proactively.
/// Cloning is cheap and clones share the same underlying map.
///
/// # Example
///
/// ```
/// use padauk_storage::{KeyValue, MemoryStore};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// store.set("greeting", "မင်္ဂလာပါ", Some(Duration::from_secs(60))).await?;
/// assert_eq!(store.get("greeting").await?.as_deref(), Some("မင်္ဂလာပါ"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, StoredEntry>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, including not-yet-collected expired ones.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Remove expired entries and return how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = entries.len(), "Cleaned up expired entries");
        }
        removed
    }
}

#[async_trait::async_trait]
impl KeyValue for MemoryStore {
    async fn get(&self, key: &str) -> PadaukResult<Option<String>> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                tracing::debug!(key, "Entry expired, removing");
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> PadaukResult<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            StoredEntry {
                value: value.to_string(),
                created_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }
}
