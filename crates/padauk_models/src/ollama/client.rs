//! Ollama LLM driver implementation.

use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest;

use futures_util::StreamExt;
use padauk_error::{PadaukResult, UpstreamError, UpstreamErrorKind};
use padauk_interface::{ChunkStream, StreamChunk, Streaming, TranslationDriver};
use tracing::{debug, info, instrument};

/// Ollama driver for local or hosted model execution.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// Ollama client instance
    client: Ollama,

    /// Model name (e.g., "deepseek-v3.1:671b-cloud")
    model_name: String,

    /// Ollama server URL
    base_url: String,
}

impl OllamaClient {
    /// Create a new Ollama driver with default localhost connection.
    #[instrument(name = "ollama_client_new", skip_all)]
    pub fn new(model_name: impl Into<String>) -> PadaukResult<Self> {
        Self::new_with_url(model_name, "http://localhost:11434")
    }

    /// Create a new Ollama driver with custom server URL.
    ///
    /// The `OLLAMA_HOST` environment variable, when set, takes precedence
    /// over the passed URL.
    #[instrument(name = "ollama_client_new_with_url", skip_all)]
    pub fn new_with_url(
        model_name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> PadaukResult<Self> {
        let model_name = model_name.into();
        let base_url = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| base_url.into());

        info!(
            model = %model_name,
            url = %base_url,
            "Creating Ollama driver"
        );

        let client = Ollama::new(base_url.clone(), 11434);

        Ok(Self {
            client,
            model_name,
            base_url,
        })
    }

    /// The server URL this driver talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convert an ollama-rs error into a structured upstream error.
    fn parse_ollama_error(err: impl std::fmt::Display) -> UpstreamError {
        let err_msg = err.to_string();

        if let Some(status_code) = extract_status_code(&err_msg) {
            UpstreamError::new(UpstreamErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            UpstreamError::new(UpstreamErrorKind::ApiRequest(err_msg))
        }
    }
}

/// Extract an HTTP status code from an error message string.
///
/// Parses strings like "ollama api error; code 503; ..." and extracts the
/// numeric status code.
fn extract_status_code(error_msg: &str) -> Option<u16> {
    for marker in ["code ", "status "] {
        if let Some(start) = error_msg.find(marker) {
            let code_str = &error_msg[start + marker.len()..];
            let digits: String = code_str.chars().take_while(|c| c.is_numeric()).collect();
            if digits.len() == 3
                && let Ok(code) = digits.parse()
            {
                return Some(code);
            }
        }
    }
    None
}

#[async_trait::async_trait]
impl TranslationDriver for OllamaClient {
    #[instrument(skip(self, prompt))]
    async fn translate(&self, prompt: &str) -> PadaukResult<String> {
        debug!(prompt_length = prompt.len(), "Generating with Ollama");

        let request = GenerationRequest::new(self.model_name.clone(), prompt.to_string());

        let response = self
            .client
            .generate(request)
            .await
            .map_err(Self::parse_ollama_error)?;

        debug!(
            response_length = response.response.len(),
            "Received response from Ollama"
        );

        Ok(response.response)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait::async_trait]
impl Streaming for OllamaClient {
    #[instrument(skip(self, prompt))]
    async fn translate_stream(&self, prompt: &str) -> PadaukResult<ChunkStream> {
        debug!(prompt_length = prompt.len(), "Starting Ollama stream");

        let request = GenerationRequest::new(self.model_name.clone(), prompt.to_string());

        let stream = self
            .client
            .generate_stream(request)
            .await
            .map_err(Self::parse_ollama_error)?;

        // Each stream item carries a batch of responses; concatenate the
        // batch into one chunk and mark it final when the server says done.
        let chunk_stream = stream.map(|item| match item {
            Ok(responses) => {
                let is_final = responses.iter().any(|r| r.done);
                let text: String = responses.into_iter().map(|r| r.response).collect();
                Ok(StreamChunk { text, is_final })
            }
            Err(e) => Err(UpstreamError::new(UpstreamErrorKind::StreamInterrupted(
                e.to_string(),
            ))
            .into()),
        });

        Ok(Box::pin(chunk_stream))
    }
}
