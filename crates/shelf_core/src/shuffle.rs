use crate::prng::Mulberry32;

/// Fisher-Yates over a copy of `items`, driven by [`Mulberry32`].
///
/// The same seed always yields the same permutation, so everyone loading
/// the list inside one window sees the same order. The input is untouched.
pub fn shuffle_deterministic<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut rng = Mulberry32::new(i64::from(seed));
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }
    out
}
