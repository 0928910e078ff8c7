use pretty_assertions::assert_eq;
use shelf_core::{
    shuffle_deterministic, update, Book, Msg, RefreshScheduler, ShelfConfig, ShelfState,
    ShuffleWindow,
};

const WINDOW_MS: i64 = 600_000;
/// 200 seconds into epoch 2_833_333.
const NOW_MS: i64 = 1_700_000_000_000;
const NEXT_WINDOW_MS: i64 = 1_700_000_400_000;

fn books(count: usize) -> Vec<Book> {
    (0..count).map(|i| Book::titled(format!("Book {i}"))).collect()
}

fn loaded(count: usize) -> ShelfState {
    let (state, _) = update(ShelfState::default(), Msg::Mounted { now_ms: NOW_MS });
    let (mut state, _) = update(
        state,
        Msg::FeedLoaded {
            books: books(count),
            now_ms: NOW_MS,
        },
    );
    state.consume_dirty();
    state
}

#[test]
fn scheduler_fires_once_per_window() {
    let window = ShuffleWindow::default();
    let mut scheduler = RefreshScheduler::new(window, NOW_MS);

    let mut fired = Vec::new();
    let mut now = NOW_MS;
    while now < NOW_MS + 3 * WINDOW_MS {
        if let Some(epoch) = scheduler.poll(now) {
            fired.push(epoch);
        }
        now += 10_000;
    }
    assert_eq!(fired, vec![2_833_334, 2_833_335, 2_833_336]);
    assert_eq!(scheduler.last_epoch(), 2_833_336);
}

#[test]
fn ticks_inside_window_change_nothing() {
    let state = loaded(12);
    let before = state.clone();

    let mut state = state;
    for offset in (0..400_000).step_by(10_000) {
        let (next, effects) = update(state, Msg::Tick { now_ms: NOW_MS + offset });
        assert!(effects.is_empty());
        state = next;
    }
    let (mut state, _) = update(state, Msg::Tick { now_ms: NEXT_WINDOW_MS - 1 });
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn boundary_tick_reshuffles_with_new_seed() {
    let state = loaded(12);
    let old_view = state.view_collection().to_vec();

    let (mut state, effects) = update(state, Msg::Tick { now_ms: NEXT_WINDOW_MS });
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.window_epoch(), Some(2_833_334));

    let window = ShuffleWindow::default();
    let expected = shuffle_deterministic(state.raw_collection(), window.seed_for(2_833_334));
    assert_eq!(state.view_collection(), expected.as_slice());
    assert_ne!(state.view_collection(), old_view.as_slice());

    // A second tick in the same new window is a no-op.
    let before = state.clone();
    let (state, _) = update(state, Msg::Tick { now_ms: NEXT_WINDOW_MS + 10_000 });
    assert_eq!(state, before);
}

#[test]
fn reshuffle_keeps_page_ordinal_not_items() {
    let state = loaded(12);
    let (state, _) = update(state, Msg::NextPageClicked);
    let page_before = state.view().items;
    assert_eq!(state.view().current_page, 2);

    let (state, _) = update(state, Msg::Tick { now_ms: NEXT_WINDOW_MS });
    let view = state.view();
    assert_eq!(view.current_page, 2);
    assert_eq!(view.items, state.view_collection()[5..10].to_vec());
    assert_ne!(view.items, page_before);
}

#[test]
fn load_marks_its_window_as_applied() {
    // Fetch resolved after the boundary: the load shuffles for the new
    // window and the next tick must not shuffle again.
    let (state, _) = update(ShelfState::default(), Msg::Mounted { now_ms: NOW_MS });
    let (state, _) = update(
        state,
        Msg::FeedLoaded {
            books: books(12),
            now_ms: NEXT_WINDOW_MS + 5,
        },
    );
    assert_eq!(state.window_epoch(), Some(2_833_334));
    let order = state.view_collection().to_vec();

    let (mut state, _) = update(state, Msg::Tick { now_ms: NEXT_WINDOW_MS + 10_000 });
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::Tick { now_ms: NEXT_WINDOW_MS + 20_000 });
    assert!(!state.consume_dirty());
    assert_eq!(state.view_collection(), order.as_slice());
}

#[test]
fn custom_window_and_mix_drive_the_seed() {
    let config = ShelfConfig {
        window_duration_ms: 1_000,
        seed_mix: 0,
        ..ShelfConfig::default()
    };
    let (state, _) = update(ShelfState::new(config), Msg::Mounted { now_ms: 0 });
    let (state, _) = update(
        state,
        Msg::FeedLoaded {
            books: books(5),
            now_ms: 42_500,
        },
    );
    assert_eq!(state.window_epoch(), Some(42));
    assert_eq!(
        state.view_collection(),
        shuffle_deterministic(&books(5), 42).as_slice()
    );
}
