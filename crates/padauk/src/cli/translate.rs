//! Translate command handler.

use futures_util::StreamExt;
use padauk_cache::TranslationCache;
use padauk_core::{PadaukConfig, TranslateRequest};
use padauk_error::{ConfigError, PadaukError, PadaukResult};
use padauk_gateway::TranslationGateway;
use padauk_interface::{ChunkOrigin, Streaming};
use padauk_rate_limit::CooldownTracker;
use padauk_storage::{KeyValue, MemoryStore, RestStore};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Wire up the gateway from configuration and stream one translation to
/// stdout.
pub async fn handle_translate_command(text: &str, caller: &str) -> PadaukResult<()> {
    let config = PadaukConfig::load()?;

    let store = build_store(&config)?;
    let driver = build_driver(&config)?;

    let gateway = TranslationGateway::new(
        driver,
        TranslationCache::new(store.clone(), config.gateway.cache_ttl_seconds),
        CooldownTracker::new(store, config.gateway.cooldown_seconds),
        config.gateway,
    );

    let request = TranslateRequest::new(text, caller);
    let mut stream = gateway.translate(&request).await?;

    let mut stdout = std::io::stdout();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if chunk.origin != ChunkOrigin::Model {
            debug!(origin = %chunk.origin, "Non-model output");
        }
        // A failed stdout write means the consumer went away; stop reading
        // so the gateway drops the upstream stream without persisting.
        if write!(stdout, "{}", chunk.text).and_then(|_| stdout.flush()).is_err() {
            break;
        }
    }
    writeln!(stdout).ok();

    Ok(())
}

/// Select the key-value backend: REST service when configured, in-process
/// memory otherwise.
fn build_store(config: &PadaukConfig) -> PadaukResult<Arc<dyn KeyValue>> {
    match (&config.store.url, &config.store.token) {
        (Some(url), Some(token)) => {
            info!(url = %url, "Using REST key-value backend");
            Ok(Arc::new(RestStore::new(url, token.clone())?))
        }
        (Some(_), None) => Err(PadaukError::from(ConfigError::new(
            "store.url is set but store.token is missing",
        ))),
        _ => {
            info!("No store configured, using in-process memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Select the upstream driver from configuration.
fn build_driver(config: &PadaukConfig) -> PadaukResult<Arc<dyn Streaming>> {
    match config.model.provider.as_str() {
        #[cfg(feature = "ollama")]
        "ollama" => {
            let client = match &config.model.host {
                Some(host) => padauk_models::OllamaClient::new_with_url(&config.model.model, host)?,
                None => padauk_models::OllamaClient::new(&config.model.model)?,
            };
            Ok(Arc::new(client))
        }

        #[cfg(feature = "gemini")]
        "gemini" => Ok(Arc::new(padauk_models::GeminiClient::new(
            &config.model.model,
        )?)),

        other => Err(PadaukError::from(ConfigError::new(format!(
            "Unknown or disabled provider '{}' (enabled: {})",
            other,
            enabled_providers().join(", ")
        )))),
    }
}

fn enabled_providers() -> Vec<&'static str> {
    let mut providers = Vec::new();
    #[cfg(feature = "ollama")]
    providers.push("ollama");
    #[cfg(feature = "gemini")]
    providers.push("gemini");
    providers
}
