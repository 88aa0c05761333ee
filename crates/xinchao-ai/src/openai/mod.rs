//! OpenAI backend.
//!
//! Implements [`TextProvider`](crate::TextProvider) via the Chat Completions
//! API with SSE streaming.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
