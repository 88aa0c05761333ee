//! Session concurrency guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Guard that clears the pending flag on drop, so the flag is released even
/// if the send future is cancelled or returns early.
pub(crate) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Attempt to mark the session pending. Returns `None` if a send is
    /// already in flight.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
