//! Translation request type.

use serde::{Deserialize, Serialize};

/// A single inbound translation request.
///
/// # Examples
///
/// ```
/// use padauk_core::TranslateRequest;
///
/// let request = TranslateRequest::new("ငွေထုတ်", "user_42");
/// assert_eq!(request.text, "ငွေထုတ်");
/// assert_eq!(request.caller_id, "user_42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct TranslateRequest {
    /// The text to translate (Burmese or Chinese; direction is auto-detected)
    pub text: String,
    /// Stable identifier of the caller, used for cooldown tracking
    pub caller_id: String,
}

impl TranslateRequest {
    /// Create a new request.
    pub fn new(text: impl Into<String>, caller_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            caller_id: caller_id.into(),
        }
    }

    /// Builder for constructing requests field by field.
    pub fn builder() -> TranslateRequestBuilder {
        TranslateRequestBuilder::default()
    }
}
