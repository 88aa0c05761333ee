//! Google Gemini backend.
//!
//! Implements [`TextProvider`](crate::TextProvider) via the Generative
//! Language API's `streamGenerateContent` endpoint.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
