//! Backoff policy and cooldown tracking.
//!
//! Two small rate-limiting concerns live here:
//! - [`BackoffPolicy`]: how long to wait between retries of a failed
//!   upstream call, as a pure function of attempt index and error class,
//!   plus a jittered schedule iterator for driving a retry loop.
//! - [`CooldownTracker`]: minimum enforced spacing between a caller's
//!   billable translations, persisted through the key-value backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backoff;
mod cooldown;

pub use backoff::{BackoffPolicy, BackoffSchedule};
pub use cooldown::CooldownTracker;
