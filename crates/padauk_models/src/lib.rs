//! LLM provider integrations for the Padauk translation gateway.
//!
//! This crate provides driver implementations for the upstream providers the
//! gateway can talk to, each behind its own feature flag:
//!
//! - **Ollama** (hosted or local Ollama server) - Enable with `ollama`
//! - **Gemini** (Google) - Enable with `gemini`
//!
//! # Example
//!
//! ```toml
//! [dependencies]
//! padauk_models = { version = "0.1", features = ["ollama"] }
//! ```
//!
//! ```no_run
//! # #[cfg(feature = "ollama")]
//! # {
//! use padauk_interface::TranslationDriver;
//! use padauk_models::OllamaClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new("deepseek-v3.1:671b-cloud")?;
//! let translation = client.translate("Translate: \"ငွေထုတ်\"").await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]

#[cfg(feature = "ollama")]
mod ollama;

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "ollama")]
pub use ollama::OllamaClient;

#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;
