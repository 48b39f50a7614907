//! Google Gemini driver implementation.
//!
//! Thin wrapper over the gemini-rust SDK. The gateway sends fully built
//! prompts, so the driver only manages the client handle, error parsing,
//! and chunk conversion.

use std::env;

use gemini_rust::{Gemini, client::Model};

use futures_util::{StreamExt, TryStreamExt};
use padauk_error::{PadaukResult, UpstreamError, UpstreamErrorKind};
use padauk_interface::{ChunkStream, StreamChunk, Streaming, TranslationDriver};
use tracing::{debug, instrument};

/// Driver for the Google Gemini REST API.
pub struct GeminiClient {
    /// Gemini API client
    client: Gemini,
    /// Model name requests are sent to
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Uses Model::Custom for unrecognized model names, automatically adding
    /// the "models/" prefix required by the Gemini API.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Create a new Gemini driver for the given model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_client_new", skip_all)]
    pub fn new(model_name: impl Into<String>) -> PadaukResult<Self> {
        let model_name = model_name.into();

        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            UpstreamError::new(UpstreamErrorKind::MissingApiKey("gemini".to_string()))
        })?;

        let client =
            Gemini::with_model(&api_key, Self::model_name_to_enum(&model_name)).map_err(|e| {
                UpstreamError::new(UpstreamErrorKind::ClientCreation(e.to_string()))
            })?;

        debug!(model = %model_name, "Created Gemini driver");

        Ok(Self { client, model_name })
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into a structured upstream error
    /// with an HTTP status code when one is present.
    fn parse_gemini_error(err: impl std::fmt::Display) -> UpstreamError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            UpstreamError::new(UpstreamErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            UpstreamError::new(UpstreamErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract an HTTP status code from an error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }

    /// Convert a gemini-rust generation response into a stream chunk.
    fn convert_to_stream_chunk(
        response: gemini_rust::generation::model::GenerationResponse,
    ) -> StreamChunk {
        let text = response.text();

        let is_final = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_ref())
            .is_some();

        StreamChunk { text, is_final }
    }
}

#[async_trait::async_trait]
impl TranslationDriver for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn translate(&self, prompt: &str) -> PadaukResult<String> {
        debug!(prompt_length = prompt.len(), "Generating with Gemini");

        let response = self
            .client
            .generate_content()
            .with_user_message(prompt)
            .execute()
            .await
            .map_err(Self::parse_gemini_error)?;

        Ok(response.text())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait::async_trait]
impl Streaming for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn translate_stream(&self, prompt: &str) -> PadaukResult<ChunkStream> {
        debug!(prompt_length = prompt.len(), "Starting Gemini stream");

        let gemini_stream = self
            .client
            .generate_content()
            .with_user_message(prompt)
            .execute_stream()
            .await
            .map_err(Self::parse_gemini_error)?;

        // Transform gemini TryStream into our chunk stream
        let chunk_stream = gemini_stream.into_stream().map(|result| match result {
            Ok(response) => Ok(Self::convert_to_stream_chunk(response)),
            Err(e) => Err(Self::parse_gemini_error(e).into()),
        });

        Ok(Box::pin(chunk_stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_status_code() {
        assert_eq!(
            GeminiClient::extract_status_code("bad response from server; code 503; description"),
            Some(503)
        );
        assert_eq!(GeminiClient::extract_status_code("no code here"), None);
    }
}
