use shelf_logging::shelf_info;

use crate::{Effect, Lifecycle, Msg, ShelfState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ShelfState, msg: Msg) -> (ShelfState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { now_ms } => {
            if state.mount(now_ms) {
                vec![
                    Effect::LoadFeed,
                    Effect::StartTicker {
                        interval_ms: state.config().poll_interval_ms,
                    },
                ]
            } else {
                Vec::new()
            }
        }
        Msg::FeedLoaded { books, now_ms } => {
            if state.lifecycle() == Lifecycle::Unmounted {
                return (state, Vec::new());
            }
            shelf_info!("feed loaded with {} items", books.len());
            state.replace_collection(books, now_ms);
            Vec::new()
        }
        Msg::FeedFailed(failure) => {
            if state.lifecycle() == Lifecycle::Unmounted {
                return (state, Vec::new());
            }
            let message = failure.message.clone();
            state.fail_load(failure);
            vec![Effect::ReportLoadFailure { message }]
        }
        Msg::NextPageClicked => {
            if state.is_mounted() && state.go_next() {
                vec![Effect::ScrollToTop]
            } else {
                Vec::new()
            }
        }
        Msg::PrevPageClicked => {
            if state.is_mounted() && state.go_previous() {
                vec![Effect::ScrollToTop]
            } else {
                Vec::new()
            }
        }
        Msg::Tick { now_ms } => {
            if state.is_mounted() {
                if let Some(epoch) = state.refresh_if_window_changed(now_ms) {
                    shelf_info!("shuffle window advanced to epoch {}", epoch);
                }
            }
            Vec::new()
        }
        Msg::Unmounted => {
            if state.unmount() {
                vec![Effect::StopTicker]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
