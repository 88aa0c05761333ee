//! Gemini client struct and request building.

use crate::{Role, Turn};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:streamGenerateContent?alt=sse",
            GEMINI_API_BASE, self.config.model
        )
    }

    /// Build the JSON request body. Gemini takes the system instruction
    /// out-of-band, not as a transcript entry.
    pub(crate) fn build_request_body(
        &self,
        system_instruction: &str,
        transcript: &[Turn],
    ) -> serde_json::Value {
        let mut contents = Vec::new();
        for turn in transcript {
            let role = match turn.role {
                Role::User => "user",
                Role::Model => "model",
                Role::System => continue,
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": turn.text }]
            }));
        }

        serde_json::json!({
            "contents": contents,
            "systemInstruction": {
                "parts": [{ "text": system_instruction }]
            },
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeminiConfig;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key"))
    }

    #[test]
    fn body_maps_roles_and_preserves_order() {
        let transcript = vec![
            Turn::model("Xin chào!"),
            Turn::user("提灯を探しています"),
        ];
        let body = client().build_request_body("指示", &transcript);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[0]["parts"][0]["text"], "Xin chào!");
        assert_eq!(contents[1]["role"], "user");
    }

    #[test]
    fn system_instruction_is_out_of_band() {
        let body = client().build_request_body("コンシェルジュ指示", &[]);
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "コンシェルジュ指示"
        );
        assert!(body["contents"].as_array().unwrap().is_empty());
    }

    #[test]
    fn system_turns_are_skipped_in_contents() {
        let transcript = vec![
            Turn {
                role: Role::System,
                text: "stray".into(),
            },
            Turn::user("hi"),
        ];
        let body = client().build_request_body("sys", &transcript);
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["role"], "user");
    }

    #[test]
    fn streaming_url_targets_sse() {
        let url = client().api_url();
        assert!(url.contains("gemini-2.0-flash:streamGenerateContent"));
        assert!(url.ends_with("alt=sse"));
    }
}
