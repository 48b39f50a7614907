//! Request pipeline for the Padauk translation gateway.
//!
//! One [`TranslationGateway`] invocation runs the full sequence:
//! validation → cache lookup → cooldown check → retry-wrapped upstream call
//! → streaming relay → cache/cooldown write-back, with a static glossary
//! fallback when the upstream is down. The cache runs before the cooldown
//! gate: a hit costs nothing upstream, so repeated identical requests stay
//! free and instant even mid-cooldown.
//!
//! Validation and cooldown rejections surface as errors so the caller can
//! render them specifically; every other failure resolves into the output
//! stream as a bilingual user-facing message, because the transport is a
//! one-way text stream with no side channel.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gateway;
pub mod messages;
mod retry;
mod validate;

pub use gateway::TranslationGateway;
pub use messages::user_message;
pub use validate::validate_input;
