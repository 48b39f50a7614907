//! Inbound text validation.

use padauk_error::{ValidationError, ValidationErrorKind};
use regex::Regex;
use std::sync::LazyLock;

/// Obviously unsafe substrings: script tags, inline event handlers, and
/// javascript: URIs. Input is prompt text, not markup, so anything matching
/// is rejected outright rather than sanitized.
static UNSAFE_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*script|javascript\s*:|\bon\w+\s*=").expect("valid denylist pattern")
});

/// Validate inbound translation text against length and content rules.
///
/// Lengths are measured in characters, not bytes. Burmese text is three
/// bytes per character in UTF-8 and the limits come from the UI's character
/// counter.
///
/// # Examples
///
/// ```
/// use padauk_gateway::validate_input;
///
/// assert!(validate_input("ငွေထုတ်", 1, 2000).is_ok());
/// assert!(validate_input("   ", 1, 2000).is_err());
/// ```
pub fn validate_input(text: &str, min_len: usize, max_len: usize) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::Empty));
    }

    let len = text.chars().count();

    if len < min_len {
        return Err(ValidationError::new(ValidationErrorKind::TooShort {
            min: min_len,
            len,
        }));
    }

    if len > max_len {
        return Err(ValidationError::new(ValidationErrorKind::TooLong {
            max: max_len,
            len,
        }));
    }

    if UNSAFE_CONTENT.is_match(text) {
        return Err(ValidationError::new(ValidationErrorKind::UnsafeContent));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_normal_text() {
        assert!(validate_input("ငွေထုတ်လုပ်ချင်ပါတယ်", 1, 2000).is_ok());
        assert!(validate_input("我要提款", 1, 2000).is_ok());
        assert!(validate_input("mixed 提款 request", 1, 2000).is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(matches!(
            validate_input("", 1, 2000).unwrap_err().kind,
            ValidationErrorKind::Empty
        ));
        assert!(matches!(
            validate_input("   \n\t ", 1, 2000).unwrap_err().kind,
            ValidationErrorKind::Empty
        ));
    }

    #[test]
    fn test_rejects_too_long() {
        let text = "စ".repeat(2001);
        let err = validate_input(&text, 1, 2000).unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::TooLong { max: 2000, len: 2001 }
        ));
    }

    #[test]
    fn test_length_is_measured_in_characters() {
        // 2000 Burmese characters are 6000 bytes; still valid
        let text = "က".repeat(2000);
        assert!(validate_input(&text, 1, 2000).is_ok());
    }

    #[test]
    fn test_rejects_too_short() {
        let err = validate_input("ab", 3, 2000).unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::TooShort { min: 3, len: 2 }
        ));
    }

    #[test]
    fn test_rejects_script_tags() {
        assert!(matches!(
            validate_input("<script>alert(1)</script>", 1, 2000)
                .unwrap_err()
                .kind,
            ValidationErrorKind::UnsafeContent
        ));
        assert!(validate_input("< ScRiPt >x", 1, 2000).is_err());
    }

    #[test]
    fn test_rejects_javascript_uris_and_handlers() {
        assert!(validate_input("javascript:alert(1)", 1, 2000).is_err());
        assert!(validate_input("<img onerror=hack()>", 1, 2000).is_err());
        assert!(validate_input("a onclick = doIt()", 1, 2000).is_err());
    }

    #[test]
    fn test_plain_mentions_are_not_flagged() {
        // Words containing "on" without an assignment are fine
        assert!(validate_input("translation online", 1, 2000).is_ok());
    }
}
