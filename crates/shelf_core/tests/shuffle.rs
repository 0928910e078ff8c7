use pretty_assertions::assert_eq;
use shelf_core::{shuffle_deterministic, Mulberry32, ShuffleWindow};

#[test]
fn mulberry32_matches_reference_outputs() {
    let mut rng = Mulberry32::new(42);
    let raw: Vec<u32> = (0..3).map(|_| rng.next_u32()).collect();
    assert_eq!(raw, vec![2_581_720_956, 1_925_393_290, 3_661_312_704]);

    let mut zero = Mulberry32::new(0);
    let raw: Vec<u32> = (0..3).map(|_| zero.next_u32()).collect();
    assert_eq!(raw, vec![1_144_304_738, 1_416_247, 958_946_056]);
}

#[test]
fn negative_seed_wraps_to_32_bits() {
    let mut negative = Mulberry32::new(-1);
    let mut wrapped = Mulberry32::new(i64::from(u32::MAX));
    for _ in 0..16 {
        assert_eq!(negative.next_u32(), wrapped.next_u32());
    }
    assert_eq!(Mulberry32::new(-1).next_u32(), 3_850_105_811);
}

#[test]
fn floats_stay_in_unit_interval() {
    for value in Mulberry32::new(7).take(10_000) {
        assert!((0.0..1.0).contains(&value), "{value} out of range");
    }
}

#[test]
fn next_index_stays_below_bound() {
    let mut rng = Mulberry32::new(99);
    for bound in 1..200 {
        assert!(rng.next_index(bound) < bound);
    }
}

#[test]
fn seed_42_permutation_is_reproducible() {
    let items = ['A', 'B', 'C', 'D', 'E'];
    let first = shuffle_deterministic(&items, 42);
    let second = shuffle_deterministic(&items, 42);

    assert_eq!(first, second);
    assert_eq!(first, vec!['A', 'E', 'C', 'B', 'D']);
}

#[test]
fn shuffle_leaves_input_untouched() {
    let items = vec![1, 2, 3, 4, 5, 6];
    let _ = shuffle_deterministic(&items, 5);
    assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn shuffle_of_twelve_matches_reference() {
    let items: Vec<u32> = (0..12).collect();
    assert_eq!(
        shuffle_deterministic(&items, 42),
        vec![2, 0, 5, 10, 9, 11, 3, 1, 6, 8, 4, 7]
    );
}

#[test]
fn empty_and_single_inputs() {
    let empty: Vec<u8> = Vec::new();
    assert!(shuffle_deterministic(&empty, 1).is_empty());
    assert_eq!(shuffle_deterministic(&["only"], 1), vec!["only"]);
}

#[test]
fn window_seed_mixes_epoch_with_constant() {
    let window = ShuffleWindow::default();
    let now_ms = 1_700_000_000_000;

    assert_eq!(window.epoch(now_ms), 2_833_333);
    assert_eq!(window.seed_at(now_ms), 2_652_652_044);
    assert_eq!(
        shuffle_deterministic(&['A', 'B', 'C', 'D', 'E'], window.seed_at(now_ms)),
        vec!['C', 'E', 'B', 'D', 'A']
    );
}

#[test]
fn window_epoch_floors_negative_times() {
    let window = ShuffleWindow::new(1_000, 0);
    assert_eq!(window.epoch(-1), -1);
    assert_eq!(window.epoch(-1_000), -1);
    assert_eq!(window.epoch(-1_001), -2);
    assert_eq!(window.epoch(0), 0);
    assert_eq!(window.epoch(999), 0);
}
