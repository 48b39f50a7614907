//! Upstream provider error types and retry classification.

/// Kinds of upstream LLM provider failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UpstreamErrorKind {
    /// Provider API key not found in environment
    #[display("{} API key not set in environment", _0)]
    MissingApiKey(String),
    /// Failed to create the provider client
    #[display("Failed to create provider client: {}", _0)]
    ClientCreation(String),
    /// API request failed without a recognizable status code
    #[display("Provider API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The response stream broke mid-flight
    #[display("Stream interrupted: {}", _0)]
    StreamInterrupted(String),
}

/// Retry classification for an upstream failure.
///
/// Determines both whether a request is retried and how aggressively the
/// backoff schedule grows between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorClass {
    /// Authentication/authorization failure or malformed request. Never retried.
    Fatal,
    /// The provider throttled us (HTTP 429). Retried with the long multiplier.
    RateLimited,
    /// The provider is overloaded or down (HTTP 503). Retried with the long multiplier.
    ServiceUnavailable,
    /// Anything else transient: timeouts, network errors, generic 5xx.
    Retryable,
}

impl UpstreamErrorKind {
    /// Classify this failure for retry purposes.
    ///
    /// Pure function of the status code and message; no I/O.
    pub fn class(&self) -> ErrorClass {
        match self {
            UpstreamErrorKind::MissingApiKey(_) | UpstreamErrorKind::ClientCreation(_) => {
                ErrorClass::Fatal
            }
            UpstreamErrorKind::HttpError {
                status_code,
                message,
            } => match status_code {
                400 | 401 | 403 => ErrorClass::Fatal,
                429 => ErrorClass::RateLimited,
                503 => ErrorClass::ServiceUnavailable,
                _ => classify_message(message),
            },
            UpstreamErrorKind::ApiRequest(message)
            | UpstreamErrorKind::StreamInterrupted(message) => classify_message(message),
        }
    }

    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        self.class() != ErrorClass::Fatal
    }
}

/// Classify a failure from its message alone, for errors that carry no
/// recognizable status code.
fn classify_message(message: &str) -> ErrorClass {
    let lower = message.to_lowercase();

    if lower.contains("api key") || lower.contains("authentication") || lower.contains("permission")
    {
        ErrorClass::Fatal
    } else if lower.contains("service unavailable") || lower.contains("overloaded") {
        ErrorClass::ServiceUnavailable
    } else {
        ErrorClass::Retryable
    }
}

/// Upstream error with source location tracking.
///
/// # Examples
///
/// ```
/// use padauk_error::{ErrorClass, UpstreamError, UpstreamErrorKind};
///
/// let err = UpstreamError::new(UpstreamErrorKind::HttpError {
///     status_code: 503,
///     message: "Service Unavailable".to_string(),
/// });
/// assert_eq!(err.kind.class(), ErrorClass::ServiceUnavailable);
/// assert!(err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: {} at line {} in {}", kind, line, file)]
pub struct UpstreamError {
    /// The kind of error that occurred
    pub kind: UpstreamErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new upstream error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UpstreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status_code: u16, message: &str) -> UpstreamErrorKind {
        UpstreamErrorKind::HttpError {
            status_code,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_auth_failures_are_fatal() {
        assert_eq!(http(401, "unauthorized").class(), ErrorClass::Fatal);
        assert_eq!(http(403, "forbidden").class(), ErrorClass::Fatal);
        assert_eq!(http(400, "bad request").class(), ErrorClass::Fatal);
        assert!(!http(401, "unauthorized").is_retryable());
    }

    #[test]
    fn test_auth_messages_are_fatal_without_status() {
        assert_eq!(
            UpstreamErrorKind::ApiRequest("invalid API key".to_string()).class(),
            ErrorClass::Fatal
        );
        assert_eq!(
            UpstreamErrorKind::ApiRequest("authentication failed".to_string()).class(),
            ErrorClass::Fatal
        );
        assert_eq!(
            UpstreamErrorKind::ApiRequest("permission denied".to_string()).class(),
            ErrorClass::Fatal
        );
    }

    #[test]
    fn test_429_is_rate_limited() {
        assert_eq!(http(429, "too many requests").class(), ErrorClass::RateLimited);
    }

    #[test]
    fn test_503_and_overload_are_service_unavailable() {
        assert_eq!(http(503, "").class(), ErrorClass::ServiceUnavailable);
        assert_eq!(
            UpstreamErrorKind::ApiRequest("model is overloaded".to_string()).class(),
            ErrorClass::ServiceUnavailable
        );
        assert_eq!(
            http(500, "Service Unavailable").class(),
            ErrorClass::ServiceUnavailable
        );
    }

    #[test]
    fn test_everything_else_is_retryable() {
        assert_eq!(http(500, "internal error").class(), ErrorClass::Retryable);
        assert_eq!(http(504, "gateway timeout").class(), ErrorClass::Retryable);
        assert_eq!(
            UpstreamErrorKind::ApiRequest("connection reset".to_string()).class(),
            ErrorClass::Retryable
        );
        assert_eq!(
            UpstreamErrorKind::StreamInterrupted("connection closed".to_string()).class(),
            ErrorClass::Retryable
        );
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let kind = UpstreamErrorKind::MissingApiKey("gemini".to_string());
        assert_eq!(kind.class(), ErrorClass::Fatal);
    }
}
