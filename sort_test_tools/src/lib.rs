pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// Integer search over a slice.
///
/// `None` is the not-found sentinel. Implementations that need sorted input report so via
/// `requires_sorted`, the generic tests then only ever hand them ascending slices.
pub trait Search {
    fn name() -> String;

    fn requires_sorted() -> bool;

    fn search(arr: &[i32], key: i32) -> Option<usize>;
}

pub mod patterns;
pub mod search_tests;
