use crate::window::{ShuffleWindow, WindowEpoch};

/// Default period between window checks: ten seconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;

/// Edge-triggered window watcher.
///
/// Polled far more often than the window length; reports a new epoch only on
/// the poll that first observes it, so a view is regenerated at most once per
/// window transition. Each poll is a single division and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshScheduler {
    window: ShuffleWindow,
    last_epoch: WindowEpoch,
}

impl RefreshScheduler {
    pub fn new(window: ShuffleWindow, now_ms: i64) -> Self {
        Self {
            window,
            last_epoch: window.epoch(now_ms),
        }
    }

    pub fn last_epoch(&self) -> WindowEpoch {
        self.last_epoch
    }

    /// Marks `epoch` as already applied, e.g. after a fresh load shuffled
    /// with it.
    pub fn mark_applied(&mut self, epoch: WindowEpoch) {
        self.last_epoch = epoch;
    }

    /// Returns the new epoch when it differs from the last applied one and
    /// records it; `None` otherwise.
    pub fn poll(&mut self, now_ms: i64) -> Option<WindowEpoch> {
        let now_epoch = self.window.epoch(now_ms);
        if now_epoch == self.last_epoch {
            return None;
        }
        self.last_epoch = now_epoch;
        Some(now_epoch)
    }
}
