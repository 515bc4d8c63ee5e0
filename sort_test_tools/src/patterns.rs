use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;

// --- Public ---

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// Seed shared by every pattern in this process. Set `OVERRIDE_SEED` to replay a failure.
pub fn random_init_seed() -> u64 {
    *SEED
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let saw_len = len.div_ceil(saw_count.max(1));
    let mut vals = random(len);
    for chunk in vals.chunks_mut(saw_len) {
        chunk.sort_unstable();
    }

    vals
}

pub fn almost_sorted(len: usize) -> Vec<i32> {
    //     .:
    //  .::.:
    // .::::.

    let mut vals = ascending(len);
    swap_random_pairs(&mut vals, &mut new_rng());
    vals
}

/// Performs `v.len() / 10` swaps of two independently drawn positions. A swap may pick the
/// same position twice and do nothing.
pub fn swap_random_pairs<T, R: Rng + ?Sized>(v: &mut [T], rng: &mut R) {
    let len = v.len();
    for _ in 0..(len / 10) {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        v.swap(a, b);
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
