//! Per-caller cooldown tracking.

use padauk_storage::KeyValue;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument, warn};

/// Tracks the timestamp of each caller's last billable translation and
/// enforces a minimum spacing between them.
///
/// Availability beats strict enforcement: if the backend cannot be read the
/// caller is treated as not in cooldown, and a failed write is logged and
/// dropped. Records are stored with the window as their TTL, so stale
/// entries age out of the backend on their own.
#[derive(Clone)]
pub struct CooldownTracker {
    store: Arc<dyn KeyValue>,
    window: Duration,
}

impl std::fmt::Debug for CooldownTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CooldownTracker")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl CooldownTracker {
    /// Create a tracker over a key-value backend with the given window.
    pub fn new(store: Arc<dyn KeyValue>, window_seconds: u64) -> Self {
        Self {
            store,
            window: Duration::from_secs(window_seconds),
        }
    }

    /// The configured cooldown window.
    pub fn window(&self) -> Duration {
        self.window
    }

    fn key(caller_id: &str) -> String {
        format!("cooldown:{}", caller_id)
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Whole seconds the caller must still wait, or 0 if not in cooldown.
    ///
    /// A backend read failure reads as "not in cooldown".
    #[instrument(skip(self))]
    pub async fn remaining(&self, caller_id: &str) -> u64 {
        let last = match self.store.get(&Self::key(caller_id)).await {
            Ok(Some(value)) => match value.parse::<u64>() {
                Ok(millis) => millis,
                Err(_) => {
                    warn!(value = %value, "Unparseable cooldown record, ignoring");
                    return 0;
                }
            },
            Ok(None) => return 0,
            Err(e) => {
                warn!(error = %e, "Cooldown read failed, treating caller as not in cooldown");
                return 0;
            }
        };

        let elapsed_ms = Self::now_millis().saturating_sub(last);
        let window_ms = self.window.as_millis() as u64;

        if elapsed_ms >= window_ms {
            0
        } else {
            // Round up so a caller is never told to wait 0 seconds
            (window_ms - elapsed_ms).div_ceil(1000)
        }
    }

    /// Record a billable translation for the caller, starting their window.
    ///
    /// Write failures are logged and dropped.
    #[instrument(skip(self))]
    pub async fn touch(&self, caller_id: &str) {
        let now = Self::now_millis().to_string();

        match self
            .store
            .set(&Self::key(caller_id), &now, Some(self.window))
            .await
        {
            Ok(()) => debug!("Updated cooldown record"),
            Err(e) => warn!(error = %e, "Cooldown write failed, continuing"),
        }
    }
}
