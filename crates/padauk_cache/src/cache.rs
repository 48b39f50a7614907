//! Translation cache implementation.

use padauk_storage::KeyValue;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Cache of completed translations keyed by normalized source text.
///
/// The key is the trimmed source text, shared across all callers: repeated
/// common phrases hit regardless of who asked first. Expiry is handled by
/// the backing store's TTL.
///
/// The cache never propagates a backend failure. A failed read degrades to
/// a miss and a failed write to a logged no-op. A broken backend must cost
/// latency, never a translation.
#[derive(Clone)]
pub struct TranslationCache {
    store: Arc<dyn KeyValue>,
    ttl: Duration,
}

impl std::fmt::Debug for TranslationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TranslationCache {
    /// Create a cache over a key-value backend with the given entry lifetime.
    pub fn new(store: Arc<dyn KeyValue>, ttl_seconds: u64) -> Self {
        debug!(ttl_seconds, "Creating translation cache");
        Self {
            store,
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Entry lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn key(source_text: &str) -> String {
        format!("translation:{}", source_text.trim())
    }

    /// Fetch the cached translation for a source text, if present and fresh.
    #[instrument(skip(self, source_text))]
    pub async fn get(&self, source_text: &str) -> Option<String> {
        match self.store.get(&Self::key(source_text)).await {
            Ok(Some(translation)) => {
                debug!("Cache hit");
                Some(translation)
            }
            Ok(None) => {
                debug!("Cache miss");
                None
            }
            Err(e) => {
                warn!(error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    /// Store a completed translation.
    ///
    /// Empty translations are not cached; a stream that produced nothing
    /// has nothing to persist.
    #[instrument(skip(self, source_text, translation))]
    pub async fn set(&self, source_text: &str, translation: &str) {
        if translation.is_empty() {
            return;
        }

        match self
            .store
            .set(&Self::key(source_text), translation, Some(self.ttl))
            .await
        {
            Ok(()) => debug!("Saved translation to cache"),
            Err(e) => warn!(error = %e, "Cache write failed, continuing"),
        }
    }
}
