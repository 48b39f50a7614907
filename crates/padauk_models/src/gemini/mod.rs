//! Google Gemini provider integration.

mod client;

pub use client::GeminiClient;
