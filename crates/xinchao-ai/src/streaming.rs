//! Server-Sent Events (SSE) parsing.
//!
//! Both the Gemini and OpenAI APIs deliver streaming replies as SSE. The
//! line-level state machine lives in [`SseParser`] so it can be exercised
//! without a network; [`parse_sse_stream`] drives it over a reqwest body.

use futures_util::StreamExt;
use tokio::io::AsyncBufReadExt;
use tokio_util::io::StreamReader;

use crate::ProviderError;

/// A single SSE event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type (e.g. "message_start"), if the stream names one.
    pub event: Option<String>,
    /// The event data, with multi-line data joined by '\n'.
    pub data: String,
}

/// Incremental SSE parser fed one line at a time (without the trailing
/// newline). A blank line terminates the pending event.
#[derive(Debug, Default)]
pub struct SseParser {
    event: Option<String>,
    data: String,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. Returns a completed event on the blank separator line
    /// if any data has accumulated.
    pub fn push_line(&mut self, line: &str) -> Option<SseEvent> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            if self.data.is_empty() {
                self.event = None;
                return None;
            }
            return Some(SseEvent {
                event: self.event.take(),
                data: std::mem::take(&mut self.data),
            });
        }

        if let Some(name) = line.strip_prefix("event:") {
            self.event = Some(name.trim_start().to_string());
        } else if let Some(data) = line.strip_prefix("data:") {
            if !self.data.is_empty() {
                self.data.push('\n');
            }
            self.data.push_str(data.strip_prefix(' ').unwrap_or(data));
        }
        // id:, retry:, and comment lines are ignored

        None
    }

    /// Flush a trailing event not terminated by a blank line.
    pub fn finish(self) -> Option<SseEvent> {
        if self.data.is_empty() {
            None
        } else {
            Some(SseEvent {
                event: self.event,
                data: self.data,
            })
        }
    }
}

/// Parse an SSE stream from a reqwest response, calling `on_event` for each
/// completed event.
pub async fn parse_sse_stream(
    response: reqwest::Response,
    mut on_event: impl FnMut(SseEvent),
) -> Result<(), ProviderError> {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    let reader = tokio::io::BufReader::new(StreamReader::new(byte_stream));
    let mut lines = reader.lines();

    let mut parser = SseParser::new();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| ProviderError::NetworkError(e.to_string()))?
    {
        if let Some(event) = parser.push_line(&line) {
            on_event(event);
        }
    }

    if let Some(event) = parser.finish() {
        on_event(event);
    }

    Ok(())
}
