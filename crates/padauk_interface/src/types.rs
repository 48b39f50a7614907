//! Core type definitions for the Padauk interface.

use futures_util::stream::Stream;
use padauk_error::PadaukResult;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// A single chunk from a provider's streaming response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Incremental text content (may be empty on keep-alive frames).
    pub text: String,
    /// Whether the provider marked this as the final chunk.
    pub is_final: bool,
}

/// Where a gateway output chunk came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ChunkOrigin {
    /// Fresh text relayed from the upstream model.
    Model,
    /// A previously persisted translation, returned whole.
    Cache,
    /// A static glossary fallback, returned whole.
    Glossary,
    /// A user-facing notice (classified upstream failure), returned whole.
    Notice,
}

/// A chunk of gateway output.
///
/// Cache hits, glossary fallbacks, and notices arrive as a single complete
/// chunk; model output arrives incrementally. End of output is signaled by
/// stream completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationChunk {
    /// Incremental or complete text content.
    pub text: String,
    /// Provenance of this chunk.
    pub origin: ChunkOrigin,
    /// Whether this is the final content-bearing chunk.
    pub is_final: bool,
}

/// Stream of provider chunks, as produced by a [`crate::Streaming`] driver.
pub type ChunkStream = Pin<Box<dyn Stream<Item = PadaukResult<StreamChunk>> + Send>>;

/// Stream of gateway output chunks, as produced by the translation gateway.
pub type TranslationStream = Pin<Box<dyn Stream<Item = PadaukResult<TranslationChunk>> + Send>>;
