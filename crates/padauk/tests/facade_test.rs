//! Smoke tests for the facade re-exports.
//!
//! The pieces are tested in depth in their own crates; these only pin the
//! public surface this crate promises.

use padauk::{BackoffPolicy, ErrorClass, GatewayConfig, Glossary, TranslateRequest, validate_input};

#[test]
fn test_glossary_is_reachable() {
    let glossary = Glossary::default();
    assert_eq!(
        glossary.lookup("ငွေထုတ်").as_deref(),
        Some("提款 / Withdrawal")
    );
}

#[test]
fn test_validation_is_reachable() {
    let config = GatewayConfig::default();
    assert!(validate_input("ငွေထုတ်", config.min_len, config.max_len).is_ok());
    assert!(validate_input("", config.min_len, config.max_len).is_err());
}

#[test]
fn test_backoff_policy_is_reachable() {
    let config = GatewayConfig::default();
    let policy = BackoffPolicy::new(
        config.retry_base_delay_ms,
        config.retry_max_delay_ms,
        config.max_retries,
    );
    assert_eq!(policy.delay_ms(0, ErrorClass::Retryable), 1000);
}

#[test]
fn test_request_builder_is_reachable() {
    let request = TranslateRequest::builder()
        .text("你好")
        .caller_id("user_1")
        .build()
        .unwrap();
    assert_eq!(request.text, "你好");
}
