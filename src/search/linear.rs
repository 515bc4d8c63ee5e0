search_impl!("linear_search", requires_sorted = false);

/// Returns the index of the first element equal to `key`, or `None` if there is none.
#[inline]
pub fn search<T>(arr: &[T], key: &T) -> Option<usize>
where
    T: PartialEq,
{
    search_by(arr, |elem| elem == key)
}

/// Returns the index of the first element that satisfies `pred`.
pub fn search_by<T, F>(arr: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    for (i, elem) in arr.iter().enumerate() {
        if pred(elem) {
            return Some(i);
        }
    }

    None
}
