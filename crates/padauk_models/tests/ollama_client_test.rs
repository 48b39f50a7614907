#![cfg(feature = "ollama")]

//! Tests for the Ollama driver.
//!
//! Streaming tests require a reachable Ollama server and are gated behind
//! the `api` marker feature.

use futures_util::StreamExt;
use padauk_interface::{Streaming, TranslationDriver};
use padauk_models::OllamaClient;

#[test]
fn test_driver_identity() {
    let client = OllamaClient::new("llama3").unwrap();
    assert_eq!(client.provider_name(), "ollama");
    assert_eq!(client.model_name(), "llama3");
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires a running Ollama server
async fn test_live_translate() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let client = OllamaClient::new("llama3")?;
    let text = client.translate("Say 'ok'").await?;

    assert!(!text.is_empty(), "Response should contain text");
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires a running Ollama server
async fn test_live_streaming() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let client = OllamaClient::new("llama3")?;
    let mut stream = client.translate_stream("Say 'ok'").await?;

    let mut full_text = String::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        full_text.push_str(&chunk.text);
        if chunk.is_final {
            break;
        }
    }

    assert!(!full_text.is_empty(), "Stream should produce text");
    Ok(())
}
