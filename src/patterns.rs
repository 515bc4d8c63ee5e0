//! Dataset generation for the benchmark harness.
//!
//! Every generator takes the random source explicitly, a run seeded with the same value
//! produces the same datasets.

use rand::Rng;

/// Upper bound (exclusive) of generated values unless configured otherwise.
pub const DEFAULT_VALUE_UPPER: i32 = 10_000;

/// `len` values drawn uniformly from `0..upper`.
///
/// Panics if `upper <= 0` and `len > 0`, callers validate the bound up front.
pub fn random<R: Rng + ?Sized>(len: usize, upper: i32, rng: &mut R) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    (0..len).map(|_| rng.gen_range(0..upper)).collect()
}

/// Ascending copy of `v` with `len / 10` random pair swaps applied.
///
/// Both indices of a swap are drawn independently, so a swap may be a no-op. How disordered
/// the result ends up is not controlled beyond that.
pub fn almost_sorted<R: Rng + ?Sized>(v: &[i32], rng: &mut R) -> Vec<i32> {
    //     .:
    //  .::.:
    // .::::.

    let mut vals = v.to_vec();
    vals.sort_unstable();
    sort_test_tools::patterns::swap_random_pairs(&mut vals, rng);
    vals
}

/// Copy of `v` in non-increasing order.
pub fn descending(v: &[i32]) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    let mut vals = v.to_vec();
    vals.sort_unstable_by(|a, b| b.cmp(a));
    vals
}

/// Shapes of the large input used for the pattern benchmarks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Random,
    AlmostSorted,
    Descending,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Random, Pattern::AlmostSorted, Pattern::Descending];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::AlmostSorted => "almost_sorted",
            Pattern::Descending => "descending",
        }
    }

    /// Derives this pattern from the random `base` dataset.
    pub fn derive<R: Rng + ?Sized>(self, base: &[i32], rng: &mut R) -> Vec<i32> {
        match self {
            Pattern::Random => base.to_vec(),
            Pattern::AlmostSorted => almost_sorted(base, rng),
            Pattern::Descending => descending(base),
        }
    }
}
