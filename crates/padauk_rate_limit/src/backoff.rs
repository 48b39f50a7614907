//! Exponential backoff with error-class-dependent growth.

use padauk_error::ErrorClass;
use std::time::Duration;

/// Additive jitter ceiling in milliseconds.
const JITTER_MS: u64 = 1000;

/// Retry delay policy.
///
/// The deterministic delay is
/// `min(base · multiplier^attempt, max)`, where the multiplier is 3 for
/// rate-limit and service-unavailable failures and 2 for everything else.
/// The schedule produced by [`BackoffPolicy::schedule`] adds up to one
/// second of uniform jitter per delay (still capped at `max`) to spread
/// out concurrent retries.
///
/// # Examples
///
/// ```
/// use padauk_error::ErrorClass;
/// use padauk_rate_limit::BackoffPolicy;
///
/// let policy = BackoffPolicy::new(1000, 10_000, 3);
///
/// assert_eq!(policy.delay_ms(0, ErrorClass::Retryable), 1000);
/// assert_eq!(policy.delay_ms(1, ErrorClass::Retryable), 2000);
/// assert_eq!(policy.delay_ms(1, ErrorClass::ServiceUnavailable), 3000);
/// // Capped at the maximum
/// assert_eq!(policy.delay_ms(5, ErrorClass::ServiceUnavailable), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    base_delay_ms: u64,
    max_delay_ms: u64,
    max_retries: usize,
}

impl BackoffPolicy {
    /// Create a policy from base delay, delay cap, and retry budget.
    pub fn new(base_delay_ms: u64, max_delay_ms: u64, max_retries: usize) -> Self {
        Self {
            base_delay_ms,
            max_delay_ms,
            max_retries,
        }
    }

    /// Backoff growth factor for an error class.
    ///
    /// Overload and throttling errors back off harder: the provider has
    /// told us to go away, so hammering it on the short curve only extends
    /// the outage.
    pub const fn multiplier(class: ErrorClass) -> u64 {
        match class {
            ErrorClass::RateLimited | ErrorClass::ServiceUnavailable => 3,
            _ => 2,
        }
    }

    /// Deterministic delay in milliseconds before retry `attempt` (0-based).
    ///
    /// Pure function; jitter is applied only by [`BackoffPolicy::schedule`].
    pub fn delay_ms(&self, attempt: u32, class: ErrorClass) -> u64 {
        let factor = Self::multiplier(class).saturating_pow(attempt);
        self.base_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms)
    }

    /// Retries allowed after the initial attempt.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Jittered delay sequence for a retry loop, one item per allowed retry.
    pub fn schedule(&self, class: ErrorClass) -> BackoffSchedule {
        BackoffSchedule {
            policy: *self,
            class,
            attempt: 0,
        }
    }
}

/// Iterator over jittered retry delays.
///
/// Yields exactly `max_retries` durations, each
/// `min(base · multiplier^attempt + uniform(0, 1s), max)`.
#[derive(Debug, Clone)]
pub struct BackoffSchedule {
    policy: BackoffPolicy,
    class: ErrorClass,
    attempt: u32,
}

impl Iterator for BackoffSchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.attempt as usize >= self.policy.max_retries {
            return None;
        }

        let factor = BackoffPolicy::multiplier(self.class).saturating_pow(self.attempt);
        let jitter = rand::random::<u64>() % JITTER_MS;
        let delay_ms = self
            .policy
            .base_delay_ms
            .saturating_mul(factor)
            .saturating_add(jitter)
            .min(self.policy.max_delay_ms);

        self.attempt += 1;
        Some(Duration::from_millis(delay_ms))
    }
}
