//! Input validation error types.

/// Kinds of input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Input is empty or whitespace-only
    #[display("Input text is empty")]
    Empty,
    /// Input is shorter than the configured minimum
    #[display("Input must be at least {} characters (got {})", min, len)]
    TooShort {
        /// Minimum allowed length in characters
        min: usize,
        /// Actual length in characters
        len: usize,
    },
    /// Input exceeds the configured maximum
    #[display("Input must be at most {} characters (got {})", max, len)]
    TooLong {
        /// Maximum allowed length in characters
        max: usize,
        /// Actual length in characters
        len: usize,
    },
    /// Input matched the unsafe-content denylist
    #[display("Input contains disallowed content")]
    UnsafeContent,
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use padauk_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::Empty);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
