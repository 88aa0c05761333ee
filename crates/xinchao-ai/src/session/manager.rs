//! ChatSession struct and lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use xinchao_common::Product;

use crate::{TextProvider, Turn};

use super::prompt::{self, GREETING, RESET_GREETING};

/// A concierge conversation: persona instruction, committed transcript, and
/// a pending flag guarding the single in-flight send.
///
/// Construct with `provider: None` to run in degraded mode, where every send
/// answers locally with a fixed fallback instead of contacting a backend.
pub struct ChatSession {
    pub(super) provider: Option<Arc<dyn TextProvider>>,
    pub(super) system_instruction: String,
    pub(super) transcript: Vec<Turn>,
    pub(super) pending: AtomicBool,
}

impl ChatSession {
    pub fn new(provider: Option<Arc<dyn TextProvider>>, catalog: &[Product]) -> Self {
        let mut session = Self {
            provider,
            system_instruction: String::new(),
            transcript: Vec::new(),
            pending: AtomicBool::new(false),
        };
        session.initialize(catalog);
        session
    }

    /// Rebuild the system instruction from the catalog and reseed the
    /// transcript with the opening greeting. Idempotent; call again whenever
    /// the catalog changes, since recommendations name catalog entries by
    /// the interpolated identity.
    pub fn initialize(&mut self, catalog: &[Product]) {
        self.seed(catalog, GREETING);
    }

    /// Discard the conversation entirely and start over with the current
    /// catalog. Also the only way out of a stuck pending state.
    pub fn reset(&mut self, catalog: &[Product]) {
        self.seed(catalog, RESET_GREETING);
    }

    fn seed(&mut self, catalog: &[Product], greeting: &str) {
        self.system_instruction = prompt::build_system_instruction(catalog);
        self.transcript.clear();
        self.transcript.push(Turn::model(greeting));
        self.pending.store(false, Ordering::Release);
    }

    /// The committed conversation history, oldest first.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// True while a send is in flight. Advisory: callers serialize sends,
    /// typically by disabling their input control.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// True when no provider is configured.
    pub fn is_degraded(&self) -> bool {
        self.provider.is_none()
    }
}
