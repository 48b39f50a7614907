//! Ollama provider integration.

mod client;

pub use client::OllamaClient;
