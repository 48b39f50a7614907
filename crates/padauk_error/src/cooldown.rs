//! Cooldown rejection error type.

/// Raised when a caller issues a billable translation before their cooldown
/// window has elapsed.
///
/// The message wording matches what the client UI displays verbatim, so it is
/// part of the public contract.
///
/// # Examples
///
/// ```
/// use padauk_error::CooldownError;
///
/// let err = CooldownError::new(4);
/// assert_eq!(err.remaining_secs, 4);
/// assert!(format!("{}", err).contains("4 more seconds"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "You must wait {} more seconds before translating again.",
    remaining_secs
)]
pub struct CooldownError {
    /// Whole seconds remaining until the caller may translate again
    pub remaining_secs: u64,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CooldownError {
    /// Create a new cooldown error with automatic location tracking.
    #[track_caller]
    pub fn new(remaining_secs: u64) -> Self {
        let location = std::panic::Location::caller();
        Self {
            remaining_secs,
            line: location.line(),
            file: location.file(),
        }
    }
}
