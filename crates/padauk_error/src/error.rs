//! Top-level error wrapper types.

use crate::{ConfigError, CooldownError, StoreError, UpstreamError, ValidationError};

/// This is the foundation error enum for the Padauk workspace.
///
/// # Examples
///
/// ```
/// use padauk_error::{PadaukError, ConfigError};
///
/// let config_err = ConfigError::new("bad TOML");
/// let err: PadaukError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PadaukErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Input validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Caller is still inside their cooldown window
    #[from(CooldownError)]
    Cooldown(CooldownError),
    /// Key-value store error
    #[from(StoreError)]
    Store(StoreError),
    /// Upstream LLM provider error
    #[from(UpstreamError)]
    Upstream(UpstreamError),
}

/// Padauk error with kind discrimination.
///
/// Only validation and cooldown failures are meant to reach callers as
/// distinguishable errors; everything else is resolved into the output
/// stream by the gateway. Inspect with [`PadaukError::kind`].
///
/// # Examples
///
/// ```
/// use padauk_error::{PadaukResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> PadaukResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::Empty))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Padauk Error: {}", _0)]
pub struct PadaukError(Box<PadaukErrorKind>);

impl PadaukError {
    /// Create a new error from a kind.
    pub fn new(kind: PadaukErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PadaukErrorKind {
        &self.0
    }

    /// Retry classification when this wraps an upstream failure.
    ///
    /// Non-upstream errors classify as `Retryable`; they never reach the
    /// retry loop, so the value is only meaningful for upstream kinds.
    pub fn upstream_class(&self) -> crate::ErrorClass {
        match self.kind() {
            PadaukErrorKind::Upstream(e) => e.kind.class(),
            _ => crate::ErrorClass::Retryable,
        }
    }

    /// The wrapped upstream error, if any.
    pub fn as_upstream(&self) -> Option<&UpstreamError> {
        match self.kind() {
            PadaukErrorKind::Upstream(e) => Some(e),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to PadaukErrorKind
impl<T> From<T> for PadaukError
where
    T: Into<PadaukErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Padauk operations.
///
/// # Examples
///
/// ```
/// use padauk_error::{PadaukResult, CooldownError};
///
/// fn check_cooldown() -> PadaukResult<()> {
///     Err(CooldownError::new(3))?
/// }
/// ```
pub type PadaukResult<T> = std::result::Result<T, PadaukError>;
