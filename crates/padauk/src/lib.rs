//! Padauk - Rate-limited, cached, retrying translation gateway
//!
//! Padauk is the server-side request pipeline of a Myanmar↔Chinese
//! customer-service translation assistant: validation → cache → cooldown →
//! upstream LLM call with classified retry → streaming relay → write-back,
//! with a static glossary fallback when the provider is down.
//!
//! # Features
//!
//! - **Streaming first**: output is an incremental chunk stream the UI can
//!   render as it arrives
//! - **Shared cache**: repeated phrases are served instantly and never
//!   consume a caller's rate budget
//! - **Cooldown**: per-caller minimum spacing between billable requests
//! - **Classified retry**: exponential backoff tuned to the failure class,
//!   with fatal errors failing fast
//! - **Pluggable storage**: in-process map or a managed REST key-value
//!   service, chosen at startup
//! - **Fallback glossary**: static bilingual term table as a last resort
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use padauk::{
//!     MemoryStore, OllamaClient, TranslateRequest, TranslationCache,
//!     TranslationGateway, CooldownTracker, GatewayConfig,
//! };
//! use futures_util::StreamExt;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     let config = GatewayConfig::default();
//!
//!     let gateway = TranslationGateway::new(
//!         Arc::new(OllamaClient::new("deepseek-v3.1:671b-cloud")?),
//!         TranslationCache::new(store.clone(), config.cache_ttl_seconds),
//!         CooldownTracker::new(store, config.cooldown_seconds),
//!         config,
//!     );
//!
//!     let mut stream = gateway
//!         .translate(&TranslateRequest::new("ငွေထုတ်", "user_1"))
//!         .await?;
//!     while let Some(chunk) = stream.next().await {
//!         print!("{}", chunk?.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `ollama` - Ollama provider support (default)
//! - `gemini` - Google Gemini provider support
//!
//! # Architecture
//!
//! Padauk is organized as a workspace with focused crates:
//!
//! - `padauk_error` - Error types and retry classification
//! - `padauk_core` - Request type, configuration, glossary, prompt
//! - `padauk_interface` - Driver traits and stream types
//! - `padauk_storage` - Pluggable key-value backends
//! - `padauk_rate_limit` - Backoff policy and cooldown tracking
//! - `padauk_cache` - Translation cache
//! - `padauk_models` - LLM provider implementations
//! - `padauk_gateway` - The request pipeline
//!
//! This crate (`padauk`) re-exports everything for convenience.

// Re-export core crates (always available)
pub use padauk_cache::*;
pub use padauk_core::*;
pub use padauk_error::*;
pub use padauk_gateway::*;
pub use padauk_interface::*;
pub use padauk_rate_limit::*;
pub use padauk_storage::*;

// Re-export providers based on features
#[cfg(any(feature = "ollama", feature = "gemini"))]
pub use padauk_models::*;
