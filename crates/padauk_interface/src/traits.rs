//! Trait definitions for upstream LLM drivers.

use crate::ChunkStream;
use async_trait::async_trait;
use padauk_error::PadaukResult;

/// Core trait that all upstream providers must implement.
///
/// This provides the minimal interface for one-shot translation. Streaming
/// delivery is exposed through the [`Streaming`] trait.
#[async_trait]
pub trait TranslationDriver: Send + Sync {
    /// Produce a complete translation for a fully built prompt.
    async fn translate(&self, prompt: &str) -> PadaukResult<String>;

    /// Provider name (e.g., "ollama", "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "deepseek-v3.1:671b-cloud").
    fn model_name(&self) -> &str;
}

/// Trait for providers that support streaming responses.
#[async_trait]
pub trait Streaming: TranslationDriver {
    /// Produce a streaming translation for a fully built prompt.
    ///
    /// Returns a stream that yields chunks as they arrive from the API.
    async fn translate_stream(&self, prompt: &str) -> PadaukResult<ChunkStream>;
}
