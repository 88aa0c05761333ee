//! Async send path for ChatSession.

use tracing::{debug, warn};

use crate::Turn;

use super::manager::ChatSession;
use super::prompt::{ERROR_FALLBACK, UNAVAILABLE_FALLBACK};
use super::types::PendingGuard;

impl ChatSession {
    /// Send a user message and stream the concierge's reply.
    ///
    /// `on_fragment` receives the *cumulative* reply text after each
    /// streamed delta, in arrival order; display it as a replacement of the
    /// previously shown value, not an append. On completion the final
    /// cumulative text is committed to the transcript as the model turn.
    ///
    /// Nothing escapes this boundary as an error: blank input and a send
    /// already in flight are no-ops, degraded mode and provider failures
    /// answer through `on_fragment` with a fixed fallback. A failed send
    /// keeps the user turn in the transcript without a model reply, so the
    /// user's message survives for context on the next attempt.
    pub async fn send<F>(&mut self, user_text: &str, mut on_fragment: F)
    where
        F: FnMut(&str) + Send,
    {
        let text = user_text.trim();
        if text.is_empty() {
            return;
        }

        let Some(provider) = self.provider.clone() else {
            on_fragment(UNAVAILABLE_FALLBACK);
            return;
        };

        let Some(_guard) = PendingGuard::acquire(&self.pending) else {
            warn!("send ignored: a request is already in flight");
            return;
        };

        self.transcript.push(Turn::user(text));

        let mut cumulative = String::new();
        let mut relay = |delta: &str| {
            cumulative.push_str(delta);
            on_fragment(&cumulative);
        };
        let outcome = provider
            .stream_reply(&self.system_instruction, &self.transcript, &mut relay)
            .await;
        drop(relay);

        match outcome {
            Ok(()) if !cumulative.is_empty() => {
                self.transcript.push(Turn::model(cumulative));
            }
            Ok(()) => {
                // Empty stream: nothing is committed and the caller's
                // placeholder never resolves. Matches the shipped behavior.
                debug!("provider stream completed without content");
            }
            Err(e) => {
                warn!(error = %e, "provider stream failed");
                on_fragment(ERROR_FALLBACK);
            }
        }
    }
}
