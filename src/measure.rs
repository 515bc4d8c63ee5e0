use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::{Search, Sort};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    SelectionSort,
    QuickSort,
    LinearSearch,
    InterpolationSearch,
}

impl Algorithm {
    /// Human readable name used in the report.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::InterpolationSearch => "Interpolation Search",
        }
    }
}

/// One timed sort invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchResult {
    pub algorithm: Algorithm,
    pub size: usize,
    pub elapsed: Duration,
}

/// One timed search, with the key looked for and where it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub size: usize,
    pub elapsed: Duration,
    pub key: i32,
    pub index: Option<usize>,
}

/// Runs `f` once and returns its output together with the wall-clock time it took.
#[inline(never)]
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = black_box(f());
    let elapsed = start.elapsed();

    (out, elapsed)
}

/// Sorts a private copy of `data` with `S` and times only the sort itself.
pub fn time_sort<S: Sort>(data: &[i32]) -> (Vec<i32>, Duration) {
    let mut copy = data.to_vec();
    let ((), elapsed) = measure(|| S::sort(black_box(copy.as_mut_slice())));

    log::debug!("{} sorted {} elements in {:?}", S::name(), copy.len(), elapsed);

    (copy, elapsed)
}

/// Times a single search for `key` in `data`.
pub fn time_search<S: Search>(data: &[i32], key: i32) -> (Option<usize>, Duration) {
    let (index, elapsed) = measure(|| S::search(black_box(data), black_box(key)));

    log::debug!(
        "{} looked for {} in {} elements, found {:?} in {:?}",
        S::name(),
        key,
        data.len(),
        index,
        elapsed
    );

    (index, elapsed)
}
