//! Fisher–Yates shuffle driven by a [`Mulberry32`] stream.

use crate::rng::Mulberry32;

/// Return a shuffled copy of `items`, leaving the input untouched.
///
/// Walks from the last index down to 1, drawing one value per step and
/// swapping with `floor(value * (i + 1))`. A slice of length `n` consumes
/// exactly `n - 1` values from the stream (none when `n < 2`).
pub fn shuffled_copy<T: Clone>(items: &[T], rng: &mut Mulberry32) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = scaled_index(rng.next_f64(), i + 1);
        out.swap(i, j);
    }
    out
}

/// Map a `[0, 1)` value onto `0..bound`.
fn scaled_index(value: f64, bound: usize) -> usize {
    // value < 1 so the product stays below bound; the min guards bound == 0.
    ((value * bound as f64).floor() as usize).min(bound.saturating_sub(1))
}
