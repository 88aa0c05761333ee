//! Concierge chat engine for the Xin Chào Vietnam storefront.
//!
//! Provides Gemini and OpenAI streaming backends behind a common
//! [`TextProvider`] trait, plus a [`ChatSession`] that owns the concierge
//! persona, the running transcript, and the streaming send protocol.
//!
//! The session surfaces model output as *cumulative* text snapshots: each
//! callback invocation carries the whole reply generated so far, so a UI
//! replaces its displayed text rather than appending. Backends that emit
//! deltas (both of ours do) are accumulated inside the session.

pub mod gemini;
pub mod openai;
pub mod session;
pub mod streaming;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::ChatSession;

/// A streaming text-generation backend.
///
/// `on_delta` receives newly generated text portions in arrival order. The
/// call resolves to `Ok(())` when the stream completes, or the first error
/// encountered before or during streaming. Implementations must not invoke
/// `on_delta` after returning.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn stream_reply(
        &self,
        system_instruction: &str,
        transcript: &[Turn],
        on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<(), ProviderError>;
}

/// One role-tagged message in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    /// Reserved for provider wire shapes that carry the system instruction
    /// inline. Never present in a session transcript.
    System,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}
