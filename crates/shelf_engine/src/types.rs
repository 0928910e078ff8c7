use shelf_core::{Book, LoadFailure, LoadFailureKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FeedLoaded { books: Vec<Book>, now_ms: i64 },
    FeedFailed(FeedError),
    Tick { now_ms: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("invalid feed location {location:?}: {message}")]
    InvalidLocation { location: String, message: String },
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("feed too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("malformed feed: {0}")]
    Malformed(String),
}

impl FeedError {
    /// The payload arrived but is not a list of records.
    pub fn is_malformed(&self) -> bool {
        matches!(self, FeedError::Malformed(_))
    }

    pub fn to_load_failure(&self) -> LoadFailure {
        let kind = if self.is_malformed() {
            LoadFailureKind::Malformed
        } else {
            LoadFailureKind::Unavailable
        };
        LoadFailure {
            kind,
            message: self.to_string(),
        }
    }
}
