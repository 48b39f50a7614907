//! The translation gateway request pipeline.

use crate::messages::user_message;
use crate::retry::stream_with_retry;
use crate::validate::validate_input;
use futures_util::StreamExt;
use padauk_cache::TranslationCache;
use padauk_core::{GatewayConfig, Glossary, TranslateRequest, translation_prompt};
use padauk_error::{CooldownError, PadaukResult};
use padauk_interface::{
    ChunkOrigin, ChunkStream, Streaming, TranslationChunk, TranslationStream,
};
use padauk_rate_limit::{BackoffPolicy, CooldownTracker};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Orchestrates one translation request end to end.
///
/// All collaborators are injected at construction, so tests substitute an
/// isolated in-memory store and a mock driver per case instead of sharing
/// process-wide state.
///
/// # Example
///
/// ```no_run
/// use padauk_cache::TranslationCache;
/// use padauk_core::{GatewayConfig, TranslateRequest};
/// use padauk_gateway::TranslationGateway;
/// use padauk_rate_limit::CooldownTracker;
/// use padauk_storage::MemoryStore;
/// use std::sync::Arc;
///
/// # async fn example(driver: Arc<dyn padauk_interface::Streaming>) -> padauk_error::PadaukResult<()> {
/// let store = Arc::new(MemoryStore::new());
/// let config = GatewayConfig::default();
///
/// let gateway = TranslationGateway::new(
///     driver,
///     TranslationCache::new(store.clone(), config.cache_ttl_seconds),
///     CooldownTracker::new(store, config.cooldown_seconds),
///     config,
/// );
///
/// let mut stream = gateway
///     .translate(&TranslateRequest::new("ငွေထုတ်", "user_1"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TranslationGateway {
    driver: Arc<dyn Streaming>,
    cache: TranslationCache,
    cooldown: CooldownTracker,
    glossary: Glossary,
    policy: BackoffPolicy,
    config: GatewayConfig,
}

impl std::fmt::Debug for TranslationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationGateway")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TranslationGateway {
    /// Assemble a gateway from its collaborators.
    pub fn new(
        driver: Arc<dyn Streaming>,
        cache: TranslationCache,
        cooldown: CooldownTracker,
        config: GatewayConfig,
    ) -> Self {
        info!(
            provider = driver.provider_name(),
            model = driver.model_name(),
            cooldown_seconds = config.cooldown_seconds,
            cache_ttl_seconds = config.cache_ttl_seconds,
            "Creating translation gateway"
        );

        let policy = BackoffPolicy::new(
            config.retry_base_delay_ms,
            config.retry_max_delay_ms,
            config.max_retries,
        );

        Self {
            driver,
            cache,
            cooldown,
            glossary: Glossary::default(),
            policy,
            config,
        }
    }

    /// Run one translation request through the pipeline.
    ///
    /// Returns `Err` only for validation failures and active cooldowns, so
    /// the caller can render those specifically. Everything after that,
    /// including an upstream outage, completes as a stream: cached or
    /// model text on success, a glossary fallback or a bilingual notice
    /// otherwise.
    ///
    /// The cache check runs strictly before any upstream call or cooldown
    /// write. Repeated identical requests are free: a hit never consumes
    /// the caller's cooldown budget.
    ///
    /// Dropping the returned stream cancels upstream consumption; nothing
    /// is persisted unless the upstream stream was drained to completion.
    #[instrument(skip(self, request), fields(caller_id = %request.caller_id))]
    pub async fn translate(&self, request: &TranslateRequest) -> PadaukResult<TranslationStream> {
        validate_input(&request.text, self.config.min_len, self.config.max_len)?;

        let source_text = request.text.trim().to_string();

        // Cache first: a hit costs nothing upstream, so it must be served
        // even while the caller is inside their cooldown window.
        if let Some(cached) = self.cache.get(&source_text).await {
            info!("Serving translation from cache");
            return Ok(single_chunk(cached, ChunkOrigin::Cache));
        }

        let remaining = self.cooldown.remaining(&request.caller_id).await;
        if remaining > 0 {
            debug!(remaining, "Caller still in cooldown");
            return Err(CooldownError::new(remaining).into());
        }

        let prompt = translation_prompt(&source_text);

        match stream_with_retry(self.driver.as_ref(), &prompt, &self.policy).await {
            Ok(upstream) => Ok(self.relay(upstream, source_text, request.caller_id.clone())),
            Err(error) => {
                warn!(error = %error, "Upstream failed after retries, falling back");

                if let Some(fallback) = self.glossary.lookup(&source_text) {
                    info!("Serving glossary fallback");
                    return Ok(single_chunk(fallback, ChunkOrigin::Glossary));
                }

                Ok(single_chunk(
                    user_message(&error).to_string(),
                    ChunkOrigin::Notice,
                ))
            }
        }
    }

    /// Relay upstream chunks to the caller while accumulating the full
    /// text, then persist it and start the caller's cooldown.
    ///
    /// Persistence happens only after the upstream stream completes with at
    /// least one chunk of text; the cache write and the cooldown touch run
    /// concurrently and each failure is logged and swallowed. A mid-stream
    /// error ends the output with a fallback or notice chunk and persists
    /// nothing.
    fn relay(
        &self,
        mut upstream: ChunkStream,
        source_text: String,
        caller_id: String,
    ) -> TranslationStream {
        let cache = self.cache.clone();
        let cooldown = self.cooldown.clone();
        let glossary = self.glossary.clone();

        Box::pin(async_stream::stream! {
            let mut full_translation = String::new();
            let mut interrupted = false;

            while let Some(item) = upstream.next().await {
                match item {
                    Ok(chunk) => {
                        let is_final = chunk.is_final;
                        if !chunk.text.is_empty() {
                            full_translation.push_str(&chunk.text);
                            yield Ok(TranslationChunk {
                                text: chunk.text,
                                origin: ChunkOrigin::Model,
                                is_final,
                            });
                        }
                        if is_final {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!(error = %error, "Upstream stream broke mid-flight");
                        interrupted = true;

                        if full_translation.is_empty()
                            && let Some(fallback) = glossary.lookup(&source_text)
                        {
                            yield Ok(TranslationChunk {
                                text: fallback,
                                origin: ChunkOrigin::Glossary,
                                is_final: true,
                            });
                        } else {
                            yield Ok(TranslationChunk {
                                text: user_message(&error).to_string(),
                                origin: ChunkOrigin::Notice,
                                is_final: true,
                            });
                        }
                        break;
                    }
                }
            }

            if !interrupted && !full_translation.is_empty() {
                debug!(
                    translation_length = full_translation.len(),
                    "Persisting translation and starting cooldown"
                );
                tokio::join!(
                    cache.set(&source_text, &full_translation),
                    cooldown.touch(&caller_id),
                );
            }
        })
    }
}

/// Wrap a complete text as a one-chunk stream.
fn single_chunk(text: String, origin: ChunkOrigin) -> TranslationStream {
    let chunk: PadaukResult<TranslationChunk> = Ok(TranslationChunk {
        text,
        origin,
        is_final: true,
    });
    Box::pin(futures_util::stream::iter([chunk]))
}
