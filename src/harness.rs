//! Drives generation, timing and set difference over all configured sizes.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchError;
use crate::measure::{self, Algorithm, BenchResult, SearchResult};
use crate::patterns::{self, Pattern};
use crate::search::{interpolation, linear};
use crate::set_ops;
use crate::unstable::{quicksort, selection_sort};

pub const DEFAULT_SIZES: [usize; 4] = [10, 100, 1_000, 10_000];
pub const DEFAULT_PREVIEW_LEN: usize = 10;

type SortTimer = fn(&[i32]) -> (Vec<i32>, Duration);

const SORTS: [(Algorithm, SortTimer); 2] = [
    (Algorithm::SelectionSort, measure::time_sort::<selection_sort::SortImpl>),
    (Algorithm::QuickSort, measure::time_sort::<quicksort::SortImpl>),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// One random dataset is generated per entry, in this order.
    pub sizes: Vec<usize>,
    /// Values are drawn from `0..value_upper`.
    pub value_upper: i32,
    /// Number of leading elements shown for each unsorted dataset.
    pub preview_len: usize,
    /// Fixed seed for reproducible datasets, drawn from OS entropy if `None`.
    pub seed: Option<u64>,
    /// Also time both sorts on random, almost sorted and descending variants of an extra
    /// dataset of the largest size.
    pub include_patterns: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            value_upper: patterns::DEFAULT_VALUE_UPPER,
            preview_len: DEFAULT_PREVIEW_LEN,
            seed: None,
            include_patterns: true,
        }
    }
}

impl BenchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    pub fn with_patterns(mut self, include_patterns: bool) -> Self {
        self.include_patterns = include_patterns;
        self
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::EmptySizes);
        }

        if self.sizes.len() < 2 {
            return Err(BenchError::NotEnoughDatasets {
                found: self.sizes.len(),
            });
        }

        if self.value_upper <= 0 {
            return Err(BenchError::EmptyValueRange {
                upper: self.value_upper,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternResult {
    pub pattern: Pattern,
    pub result: BenchResult,
}

/// Everything a run produced, ready to be formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchReport {
    pub seed: u64,
    pub preview_len: usize,
    pub datasets: Vec<Vec<i32>>,
    pub sorts: Vec<BenchResult>,
    pub patterns: Vec<PatternResult>,
    pub searches: Vec<SearchResult>,
    pub unique_in_a: Vec<i32>,
    pub unique_in_b: Vec<i32>,
}

pub fn run(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Benchmarking sizes {:?} with seed {}", config.sizes, seed);

    let mut rng = StdRng::seed_from_u64(seed);

    let datasets = config
        .sizes
        .iter()
        .map(|&size| {
            let data = patterns::random(size, config.value_upper, &mut rng);
            log::debug!("Generated dataset of {} elements", data.len());
            data
        })
        .collect::<Vec<_>>();

    let sorts = datasets
        .iter()
        .flat_map(|data| SORTS.map(|sort| bench_sort(sort, data)))
        .collect::<Vec<_>>();

    let patterns = if config.include_patterns {
        bench_patterns(config, &mut rng)
    } else {
        Vec::new()
    };

    let mut searches = Vec::with_capacity(datasets.len() * 2);
    for data in &datasets {
        if data.is_empty() {
            log::warn!("Skipping search benchmark, dataset is empty");
            continue;
        }

        let key = data[rng.gen_range(0..data.len())];
        searches.extend(bench_search(data, key));
    }

    let (unique_in_a, unique_in_b) = set_ops::symmetric_unique(&datasets[0], &datasets[1]);

    log::info!(
        "Finished {} sort, {} pattern and {} search measurements",
        sorts.len(),
        patterns.len(),
        searches.len()
    );

    Ok(BenchReport {
        seed,
        preview_len: config.preview_len,
        datasets,
        sorts,
        patterns,
        searches,
        unique_in_a,
        unique_in_b,
    })
}

// --- Private ---

fn bench_sort((algorithm, time_sort): (Algorithm, SortTimer), data: &[i32]) -> BenchResult {
    let (sorted, elapsed) = time_sort(data);
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    sort_result(algorithm, data.len(), elapsed)
}

fn bench_patterns(config: &BenchConfig, rng: &mut StdRng) -> Vec<PatternResult> {
    let size = config.sizes.iter().copied().max().unwrap_or(0);
    let base = patterns::random(size, config.value_upper, rng);

    Pattern::ALL
        .iter()
        .flat_map(|&pattern| {
            let data = pattern.derive(&base, rng);
            log::debug!("Derived {} pattern of {} elements", pattern.name(), data.len());

            SORTS.map(|sort| PatternResult {
                pattern,
                result: bench_sort(sort, &data),
            })
        })
        .collect()
}

/// Linear search runs on the dataset as generated, interpolation search on a sorted copy.
fn bench_search(data: &[i32], key: i32) -> [SearchResult; 2] {
    let (linear_index, linear_elapsed) = measure::time_search::<linear::SearchImpl>(data, key);

    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    let (interpolation_index, interpolation_elapsed) =
        measure::time_search::<interpolation::SearchImpl>(&sorted, key);

    [
        search_result(Algorithm::LinearSearch, data.len(), key, linear_index, linear_elapsed),
        search_result(
            Algorithm::InterpolationSearch,
            sorted.len(),
            key,
            interpolation_index,
            interpolation_elapsed,
        ),
    ]
}

fn sort_result(algorithm: Algorithm, size: usize, elapsed: Duration) -> BenchResult {
    BenchResult {
        algorithm,
        size,
        elapsed,
    }
}

fn search_result(
    algorithm: Algorithm,
    size: usize,
    key: i32,
    index: Option<usize>,
    elapsed: Duration,
) -> SearchResult {
    SearchResult {
        algorithm,
        size,
        elapsed,
        key,
        index,
    }
}
