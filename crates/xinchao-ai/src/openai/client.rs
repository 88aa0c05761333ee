//! OpenAI client struct and request building.

use crate::{Role, Turn};

use super::config::OpenAiConfig;

pub(crate) const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI API client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body. OpenAI takes the system instruction
    /// inline as the leading `system` message.
    pub(crate) fn build_request_body(
        &self,
        system_instruction: &str,
        transcript: &[Turn],
    ) -> serde_json::Value {
        let mut messages = vec![serde_json::json!({
            "role": "system",
            "content": system_instruction,
        })];
        for turn in transcript {
            let role = match turn.role {
                Role::User => "user",
                Role::Model => "assistant",
                Role::System => continue,
            };
            messages.push(serde_json::json!({
                "role": role,
                "content": turn.text,
            }));
        }

        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "stream": true,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpenAiConfig;

    fn client() -> OpenAiClient {
        OpenAiClient::new(OpenAiConfig::new("test-key"))
    }

    #[test]
    fn body_leads_with_system_message() {
        let transcript = vec![Turn::model("Xin chào!"), Turn::user("贈り物を探しています")];
        let body = client().build_request_body("指示", &transcript);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "指示");
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[2]["role"], "user");
    }

    #[test]
    fn body_requests_streaming() {
        let body = client().build_request_body("sys", &[]);
        assert_eq!(body["stream"], true);
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 200);
    }
}
