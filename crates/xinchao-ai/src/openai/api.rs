//! TextProvider implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{ProviderError, TextProvider, Turn};

use super::client::{OpenAiClient, OPENAI_API_URL};

#[async_trait]
impl TextProvider for OpenAiClient {
    async fn stream_reply(
        &self,
        system_instruction: &str,
        transcript: &[Turn],
        on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<(), ProviderError> {
        let body = self.build_request_body(system_instruction, transcript);

        debug!(model = %self.config.model, turns = transcript.len(), "OpenAI streaming request");

        let response = self
            .http
            .post(OPENAI_API_URL)
            .header("authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
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
            // The stream terminates with a literal "[DONE]" sentinel
            if event.data == "[DONE]" {
                return;
            }
            let Ok(data) = serde_json::from_str::<serde_json::Value>(&event.data) else {
                return;
            };
            if let Some(choices) = data["choices"].as_array() {
                for choice in choices {
                    if let Some(text) = choice["delta"]["content"].as_str() {
                        if !text.is_empty() {
                            on_delta(text);
                        }
                    }
                }
            }
        })
        .await
    }
}
