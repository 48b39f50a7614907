//! Key-value store error types.

/// Kinds of key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// The backend rejected or failed the request
    #[display("Store backend error: {}", _0)]
    Backend(String),
    /// The backend returned a payload we could not interpret
    #[display("Invalid store response: {}", _0)]
    InvalidResponse(String),
    /// The store client could not be constructed
    #[display("Failed to create store client: {}", _0)]
    ClientCreation(String),
}

/// Store error with location tracking.
///
/// Store errors are deliberately low-stakes: callers wrap every store
/// operation so that a failure degrades to a cache miss or a logged no-op
/// rather than propagating to the user.
///
/// # Examples
///
/// ```
/// use padauk_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Backend("connection refused".to_string()));
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
