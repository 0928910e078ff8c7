use crate::{Book, LoadFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Widget attached; starts the feed load and the window ticker.
    Mounted { now_ms: i64 },
    /// Feed fetch and decode succeeded.
    FeedLoaded { books: Vec<Book>, now_ms: i64 },
    /// Feed fetch or decode failed. Not retried.
    FeedFailed(LoadFailure),
    /// User asked for the following page.
    NextPageClicked,
    /// User asked for the preceding page.
    PrevPageClicked,
    /// Periodic window check from the ticker.
    Tick { now_ms: i64 },
    /// Widget detached; stops the ticker.
    Unmounted,
    /// Fallback for placeholder wiring.
    NoOp,
}
