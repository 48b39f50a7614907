//! Key-value storage trait definition.

use padauk_error::PadaukResult;
use std::time::Duration;

/// Trait for pluggable key-value storage backends.
///
/// Implementations must be safe under concurrent access; the backend is the
/// authority for serialization, so callers add no locking of their own.
/// Values are plain strings: the gateway stores translated text and
/// timestamp strings, nothing structured.
#[async_trait::async_trait]
pub trait KeyValue: Send + Sync {
    /// Fetch the value for a key.
    ///
    /// Returns `Ok(None)` for a missing or expired key.
    async fn get(&self, key: &str) -> PadaukResult<Option<String>>;

    /// Store a value, optionally expiring after `ttl`.
    ///
    /// Overwrites any existing value for the key. A `None` ttl means the
    /// entry never expires.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> PadaukResult<()>;
}
