use crate::patterns;
use crate::tests::TEST_SIZES;
use crate::Search;

fn prepare<S: Search>(mut v: Vec<i32>) -> Vec<i32> {
    if S::requires_sorted() {
        v.sort_unstable();
    }

    v
}

fn check_hit<S: Search>(v: &[i32], key: i32) {
    match S::search(v, key) {
        Some(idx) => assert_eq!(
            v[idx],
            key,
            "{} returned index {} for key {}. Seed: {}",
            S::name(),
            idx,
            key,
            patterns::random_init_seed()
        ),
        None => panic!(
            "{} did not find present key {} in {} elements. Seed: {}",
            S::name(),
            key,
            v.len(),
            patterns::random_init_seed()
        ),
    }
}

fn check_miss<S: Search>(v: &[i32], key: i32) {
    let result = S::search(v, key);
    assert_eq!(
        result,
        None,
        "{} claimed absent key {} at {:?}. Seed: {}",
        S::name(),
        key,
        result,
        patterns::random_init_seed()
    );
}

// Probing every position is quadratic for linear search, sample the larger inputs instead.
fn probe_step(len: usize) -> usize {
    (len / 300).max(1)
}

// --- TESTS ---

pub fn empty<S: Search>() {
    check_miss::<S>(&[], 0);
    check_miss::<S>(&[], 42);
    check_miss::<S>(&[], i32::MIN);
}

pub fn single<S: Search>() {
    check_hit::<S>(&[7], 7);
    check_miss::<S>(&[7], 6);
    check_miss::<S>(&[7], 8);
}

pub fn present_keys<S: Search>() {
    for test_len in TEST_SIZES {
        let v = prepare::<S>(patterns::random_uniform(test_len, 0..10_000));

        for idx in (0..v.len()).step_by(probe_step(test_len)) {
            check_hit::<S>(&v, v[idx]);
        }
    }
}

pub fn present_keys_full_range<S: Search>() {
    for test_len in TEST_SIZES {
        let v = prepare::<S>(patterns::random(test_len));

        for idx in (0..v.len()).step_by(probe_step(test_len)) {
            check_hit::<S>(&v, v[idx]);
        }
    }
}

pub fn absent_keys<S: Search>() {
    for test_len in TEST_SIZES {
        // Only even values, so every odd key is guaranteed to be absent.
        let v = prepare::<S>(
            patterns::random_uniform(test_len, 0..5_000)
                .into_iter()
                .map(|val| val * 2)
                .collect(),
        );

        for idx in (0..v.len()).step_by(probe_step(test_len)) {
            check_miss::<S>(&v, v[idx] + 1);
        }

        check_miss::<S>(&v, -1);
        check_miss::<S>(&v, 10_001);
        check_miss::<S>(&v, i32::MIN);
        check_miss::<S>(&v, i32::MAX);
    }
}

pub fn duplicate_window<S: Search>() {
    let v = [1, 3, 3, 3, 9];

    let idx = S::search(&v, 3);
    assert!(matches!(idx, Some(1..=3)), "{} returned {:?}", S::name(), idx);

    check_hit::<S>(&v, 1);
    check_hit::<S>(&v, 9);
    check_miss::<S>(&v, 2);
    check_miss::<S>(&v, 4);
}

pub fn all_equal<S: Search>() {
    for test_len in TEST_SIZES {
        let v = patterns::all_equal(test_len);

        if test_len == 0 {
            check_miss::<S>(&v, 66);
        } else {
            check_hit::<S>(&v, 66);
        }

        check_miss::<S>(&v, 65);
        check_miss::<S>(&v, 67);
    }
}

pub fn narrow_duplicates<S: Search>() {
    for test_len in TEST_SIZES {
        let v = prepare::<S>(patterns::random_uniform(test_len, 0..4));

        for key in 0..4 {
            if v.contains(&key) {
                check_hit::<S>(&v, key);
            } else {
                check_miss::<S>(&v, key);
            }
        }
    }
}

pub fn ascending<S: Search>() {
    for test_len in TEST_SIZES {
        let v = patterns::ascending(test_len);

        for idx in (0..v.len()).step_by(probe_step(test_len)) {
            assert_eq!(S::search(&v, v[idx]), Some(idx), "{}", S::name());
        }

        check_miss::<S>(&v, test_len as i32);
    }
}

#[macro_export]
macro_rules! instantiate_search_test_inner {
    ($search_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::search_tests::$test_fn_name::<$search_impl>();
        }
    };
}

#[macro_export]
macro_rules! instantiate_search_tests {
    ($search_impl:ty) => {
        $crate::instantiate_search_test_inner!($search_impl, empty);
        $crate::instantiate_search_test_inner!($search_impl, single);
        $crate::instantiate_search_test_inner!($search_impl, present_keys);
        $crate::instantiate_search_test_inner!($search_impl, present_keys_full_range);
        $crate::instantiate_search_test_inner!($search_impl, absent_keys);
        $crate::instantiate_search_test_inner!($search_impl, duplicate_window);
        $crate::instantiate_search_test_inner!($search_impl, all_equal);
        $crate::instantiate_search_test_inner!($search_impl, narrow_duplicates);
        $crate::instantiate_search_test_inner!($search_impl, ascending);
    };
}
