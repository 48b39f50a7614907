//! Test utilities for gateway tests.
//!
//! This module provides a mock streaming driver and wiring helpers.

use async_trait::async_trait;
use padauk_cache::TranslationCache;
use padauk_core::{GatewayConfig, GatewayConfigBuilder};
use padauk_error::{PadaukResult, UpstreamError, UpstreamErrorKind};
use padauk_gateway::TranslationGateway;
use padauk_interface::{ChunkStream, StreamChunk, Streaming, TranslationDriver};
use padauk_rate_limit::CooldownTracker;
use padauk_storage::MemoryStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted driver response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Stream the text in two chunks (or zero chunks if empty).
    Success(String),
    /// Fail stream acquisition with this error.
    Error(UpstreamErrorKind),
}

/// Scripted behavior across successive calls.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Same response every call.
    Always(MockResponse),
    /// Fail `failures` times, then stream `text`.
    FailThenSucceed {
        failures: usize,
        error: UpstreamErrorKind,
        text: String,
    },
}

/// Mock streaming driver with call counting.
pub struct MockDriver {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockDriver {
    pub fn new_success(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            behavior: MockBehavior::Always(MockResponse::Success(text.into())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn new_error(error: UpstreamErrorKind) -> Arc<Self> {
        Arc::new(Self {
            behavior: MockBehavior::Always(MockResponse::Error(error)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn new_fail_then_succeed(
        failures: usize,
        error: UpstreamErrorKind,
        text: impl Into<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            behavior: MockBehavior::FailThenSucceed {
                failures,
                error,
                text: text.into(),
            },
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> MockResponse {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Always(response) => response.clone(),
            MockBehavior::FailThenSucceed {
                failures,
                error,
                text,
            } => {
                if call < *failures {
                    MockResponse::Error(error.clone())
                } else {
                    MockResponse::Success(text.clone())
                }
            }
        }
    }
}

#[async_trait]
impl TranslationDriver for MockDriver {
    async fn translate(&self, _prompt: &str) -> PadaukResult<String> {
        match self.next_response() {
            MockResponse::Success(text) => Ok(text),
            MockResponse::Error(kind) => Err(UpstreamError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait]
impl Streaming for MockDriver {
    async fn translate_stream(&self, _prompt: &str) -> PadaukResult<ChunkStream> {
        match self.next_response() {
            MockResponse::Success(text) => {
                let chunks: Vec<PadaukResult<StreamChunk>> = split_chunks(&text)
                    .into_iter()
                    .map(Ok)
                    .collect();
                Ok(Box::pin(tokio_stream::iter(chunks)))
            }
            MockResponse::Error(kind) => Err(UpstreamError::new(kind).into()),
        }
    }
}

/// Split text into two stream chunks at a character boundary, the way a
/// real provider delivers partial output. Empty text streams zero chunks.
fn split_chunks(text: &str) -> Vec<StreamChunk> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 {
        return vec![StreamChunk {
            text: text.to_string(),
            is_final: true,
        }];
    }

    let mid = chars.len() / 2;
    vec![
        StreamChunk {
            text: chars[..mid].iter().collect(),
            is_final: false,
        },
        StreamChunk {
            text: chars[mid..].iter().collect(),
            is_final: true,
        },
    ]
}

/// Gateway test config: real limits, fast retries.
pub fn test_config() -> GatewayConfig {
    GatewayConfigBuilder::default()
        .retry_base_delay_ms(2u64)
        .retry_max_delay_ms(20u64)
        .build()
        .expect("valid test config")
}

/// Wire a gateway around a shared in-memory store.
pub fn build_gateway(
    driver: Arc<MockDriver>,
    store: Arc<MemoryStore>,
    config: GatewayConfig,
) -> TranslationGateway {
    TranslationGateway::new(
        driver,
        TranslationCache::new(store.clone(), config.cache_ttl_seconds),
        CooldownTracker::new(store, config.cooldown_seconds),
        config,
    )
}
