//! Trait definitions for the Padauk translation gateway.
//!
//! This crate defines the seams between the gateway and its pluggable parts:
//! upstream LLM drivers (one-shot and streaming) and the chunk types that
//! flow from a driver, through the gateway, to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Streaming, TranslationDriver};
pub use types::{ChunkOrigin, ChunkStream, StreamChunk, TranslationChunk, TranslationStream};
