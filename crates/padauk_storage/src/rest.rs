//! REST-backed key-value store.
//!
//! Speaks the Redis-over-REST command protocol used by managed KV services
//! (Upstash, Vercel KV): commands are posted as JSON arrays to the service
//! base URL with bearer authentication, and replies arrive as
//! `{"result": ...}` envelopes.

use crate::KeyValue;
use padauk_error::{PadaukResult, StoreError, StoreErrorKind};
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use std::time::Duration;
use tracing::instrument;

/// Reply envelope from the REST service.
#[derive(Debug, Deserialize)]
struct RestReply {
    result: Option<JsonValue>,
}

/// Network-attached key-value store.
///
/// # Example
///
/// ```no_run
/// use padauk_storage::{KeyValue, RestStore};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = RestStore::new("https://kv.example.com", "token")?;
/// store.set("translation:你好", "မင်္ဂလာပါ", Some(Duration::from_secs(86_400))).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestStore {
    /// Create a store client for the given service URL and bearer token.
    #[instrument(skip_all)]
    pub fn new(base_url: impl AsRef<str>, token: impl Into<String>) -> PadaukResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| StoreError::new(StoreErrorKind::ClientCreation(e.to_string())))?;

        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        tracing::info!(base_url = %base_url, "Created REST key-value store client");

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Post a command array and return the reply payload.
    async fn command(&self, command: JsonValue) -> PadaukResult<Option<JsonValue>> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .json(&command)
            .send()
            .await
            .map_err(|e| StoreError::new(StoreErrorKind::Backend(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::new(StoreErrorKind::Backend(format!(
                "HTTP {}: {}",
                status, body
            )))
            .into());
        }

        let reply: RestReply = response
            .json()
            .await
            .map_err(|e| StoreError::new(StoreErrorKind::InvalidResponse(e.to_string())))?;

        Ok(reply.result)
    }
}

#[async_trait::async_trait]
impl KeyValue for RestStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> PadaukResult<Option<String>> {
        let result = self.command(json!(["GET", key])).await?;

        match result {
            Some(JsonValue::String(value)) => Ok(Some(value)),
            Some(JsonValue::Null) | None => Ok(None),
            Some(other) => Err(StoreError::new(StoreErrorKind::InvalidResponse(format!(
                "expected string result, got {}",
                other
            )))
            .into()),
        }
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> PadaukResult<()> {
        let command = match ttl {
            Some(ttl) => json!(["SET", key, value, "EX", ttl.as_secs()]),
            None => json!(["SET", key, value]),
        };

        self.command(command).await?;
        Ok(())
    }
}
