//! Latest-intent tracking
//!
//! Each user action that triggers a fetch (switching the category filter, for
//! one) begins a new intent. Beginning an intent cancels the previous one, so
//! a slow response for an old action can be dropped instead of rendered.

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct IntentTracker {
    current: Mutex<CancellationToken>,
}

impl IntentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the running intent and hand out a token for the new one
    pub fn begin(&self) -> CancellationToken {
        let mut current = self.current.lock();
        current.cancel();
        *current = CancellationToken::new();
        current.clone()
    }

    /// Cancel whatever is running (session teardown)
    pub fn cancel(&self) {
        self.current.lock().cancel();
    }
}
