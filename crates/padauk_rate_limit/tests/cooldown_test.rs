//! Tests for per-caller cooldown tracking.

use padauk_error::{PadaukResult, StoreError, StoreErrorKind};
use padauk_rate_limit::CooldownTracker;
use padauk_storage::{KeyValue, MemoryStore};
use std::sync::Arc;
use std::time::Duration;

/// Backend that fails every operation, for degrade-path tests.
struct FailingStore;

#[async_trait::async_trait]
impl KeyValue for FailingStore {
    async fn get(&self, _key: &str) -> PadaukResult<Option<String>> {
        Err(StoreError::new(StoreErrorKind::Backend("down".to_string())).into())
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> PadaukResult<()> {
        Err(StoreError::new(StoreErrorKind::Backend("down".to_string())).into())
    }
}

#[tokio::test]
async fn test_unknown_caller_is_not_in_cooldown() {
    let tracker = CooldownTracker::new(Arc::new(MemoryStore::new()), 5);
    assert_eq!(tracker.remaining("nobody").await, 0);
}

#[tokio::test]
async fn test_touch_starts_cooldown() {
    let tracker = CooldownTracker::new(Arc::new(MemoryStore::new()), 5);

    tracker.touch("user_1").await;

    let remaining = tracker.remaining("user_1").await;
    assert!(remaining > 0);
    assert!(remaining <= 5);
}

#[tokio::test]
async fn test_callers_are_independent() {
    let tracker = CooldownTracker::new(Arc::new(MemoryStore::new()), 5);

    tracker.touch("user_1").await;

    assert!(tracker.remaining("user_1").await > 0);
    assert_eq!(tracker.remaining("user_2").await, 0);
}

#[tokio::test]
async fn test_cooldown_expires() {
    let tracker = CooldownTracker::new(Arc::new(MemoryStore::new()), 1);

    tracker.touch("user_1").await;
    assert!(tracker.remaining("user_1").await > 0);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(tracker.remaining("user_1").await, 0);
}

#[tokio::test]
async fn test_remaining_counts_down() {
    let tracker = CooldownTracker::new(Arc::new(MemoryStore::new()), 5);

    tracker.touch("user_1").await;
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let remaining = tracker.remaining("user_1").await;
    assert!(remaining >= 3, "expected ~4s left, got {}", remaining);
    assert!(remaining <= 4);
}

#[tokio::test]
async fn test_read_failure_degrades_to_not_in_cooldown() {
    let tracker = CooldownTracker::new(Arc::new(FailingStore), 5);
    assert_eq!(tracker.remaining("user_1").await, 0);
}

#[tokio::test]
async fn test_write_failure_is_swallowed() {
    let tracker = CooldownTracker::new(Arc::new(FailingStore), 5);
    // Must not panic or propagate
    tracker.touch("user_1").await;
}

#[tokio::test]
async fn test_garbage_record_is_ignored() {
    let store = Arc::new(MemoryStore::new());
    store
        .set("cooldown:user_1", "not a number", None)
        .await
        .unwrap();

    let tracker = CooldownTracker::new(store, 5);
    assert_eq!(tracker.remaining("user_1").await, 0);
}
