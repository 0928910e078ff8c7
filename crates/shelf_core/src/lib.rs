//! Shelf core: deterministic window shuffling, pagination and the pure
//! widget state machine.
mod config;
mod effect;
mod item;
mod msg;
mod pagination;
mod prng;
mod scheduler;
mod shuffle;
mod state;
mod update;
mod view_model;
mod window;

pub use config::{ConfigError, ShelfConfig};
pub use effect::Effect;
pub use item::Book;
pub use msg::Msg;
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use prng::Mulberry32;
pub use scheduler::{RefreshScheduler, DEFAULT_POLL_INTERVAL_MS};
pub use shuffle::shuffle_deterministic;
pub use state::{Lifecycle, LoadFailure, LoadFailureKind, LoadStatus, ShelfState};
pub use update::update;
pub use view_model::ShelfViewModel;
pub use window::{ShuffleWindow, WindowEpoch, DEFAULT_SEED_MIX, DEFAULT_WINDOW_DURATION_MS};
