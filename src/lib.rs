//! Textbook sorting and searching algorithms plus the harness that times them.

pub use sort_test_tools::{Search, Sort};

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

macro_rules! search_impl {
    ($name:expr, requires_sorted = $requires_sorted:expr) => {
        pub struct SearchImpl;

        impl sort_test_tools::Search for SearchImpl {
            fn name() -> String {
                $name.into()
            }

            fn requires_sorted() -> bool {
                $requires_sorted
            }

            #[inline]
            fn search(arr: &[i32], key: i32) -> Option<usize> {
                search(arr, &key)
            }
        }
    };
}

pub mod error;
pub mod harness;
pub mod measure;
pub mod patterns;
pub mod report;
pub mod search;
pub mod set_ops;
pub mod unstable;

pub use error::BenchError;
pub use harness::{run, BenchConfig, BenchReport};
