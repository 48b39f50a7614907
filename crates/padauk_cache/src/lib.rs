//! Translation result caching with TTL support.
//!
//! This crate provides the shared translation cache, reducing upstream API
//! calls and making repeated common phrases instant.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;

pub use cache::TranslationCache;
