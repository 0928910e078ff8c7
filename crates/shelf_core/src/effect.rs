#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadFeed,
    StartTicker { interval_ms: u64 },
    StopTicker,
    /// Bring the top of the widget back into view after a page change.
    ScrollToTop,
    ReportLoadFailure { message: String },
}
