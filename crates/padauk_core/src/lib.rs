//! Core data types for the Padauk translation gateway.
//!
//! This crate provides the request type, layered TOML configuration, the
//! static fallback glossary, and the translation prompt used by every
//! provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod glossary;
mod prompt;
mod request;

pub use config::{GatewayConfig, GatewayConfigBuilder, ModelConfig, PadaukConfig, StoreConfig};
pub use glossary::{Glossary, PARTIAL_MARKER};
pub use prompt::translation_prompt;
pub use request::{TranslateRequest, TranslateRequestBuilder};
