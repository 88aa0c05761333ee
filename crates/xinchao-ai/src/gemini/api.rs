//! TextProvider implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{ProviderError, TextProvider, Turn};

use super::client::GeminiClient;

#[async_trait]
impl TextProvider for GeminiClient {
    async fn stream_reply(
        &self,
        system_instruction: &str,
        transcript: &[Turn],
        on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<(), ProviderError> {
        let body = self.build_request_body(system_instruction, transcript);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = transcript.len(), "Gemini streaming request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(format!("HTTP {status}: {text}")));
        }

        parse_sse_stream(response, |event: SseEvent| {
            let Ok(data) = serde_json::from_str::<serde_json::Value>(&event.data) else {
                return;
            };
            let Some(candidates) = data["candidates"].as_array() else {
                return;
            };
            for candidate in candidates {
                if let Some(parts) = candidate["content"]["parts"].as_array() {
                    for part in parts {
                        if let Some(text) = part["text"].as_str() {
                            if !text.is_empty() {
                                on_delta(text);
                            }
                        }
                    }
                }
            }
        })
        .await
    }
}
