//! Shelf engine: feed IO, wall clock and the window ticker.
mod clock;
mod decode;
mod engine;
mod fetch;
mod ticker;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use decode::decode_feed;
pub use engine::{load_feed, EngineHandle};
pub use fetch::{FeedFetcher, FeedLocation, FetchSettings, Fetcher};
pub use ticker::{ChannelEventSink, EventSink, Ticker};
pub use types::{EngineEvent, FeedError};
