use serde::Deserialize;
use thiserror::Error;

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::scheduler::DEFAULT_POLL_INTERVAL_MS;
use crate::window::{ShuffleWindow, DEFAULT_SEED_MIX, DEFAULT_WINDOW_DURATION_MS};

/// Options recognised by the ordering/pagination engine. Presentation flags
/// belong to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    pub page_size: usize,
    pub window_duration_ms: u64,
    pub poll_interval_ms: u64,
    pub seed_mix: u32,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            window_duration_ms: DEFAULT_WINDOW_DURATION_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            seed_mix: DEFAULT_SEED_MIX,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("page_size must be at least 1")]
    ZeroPageSize,
    #[error("window_duration_ms must be at least 1")]
    ZeroWindowDuration,
    #[error("poll_interval_ms must be at least 1")]
    ZeroPollInterval,
}

impl ShelfConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.window_duration_ms == 0 {
            return Err(ConfigError::ZeroWindowDuration);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    pub fn window(&self) -> ShuffleWindow {
        ShuffleWindow::new(self.window_duration_ms, self.seed_mix)
    }
}
