//! Quicksort with Lomuto partitioning around the last element of each range.

use std::cmp::Ordering;

sort_impl!("quicksort_lomuto_unstable");

/// Sorts the slice with a textbook quicksort.
///
/// The pivot is always the last element of the current range. There is no pivot sampling and
/// no fallback, ascending or descending input hits the *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    quicksort(arr, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `left..=right` of `arr`, leaving everything outside untouched.
///
/// An empty or single element range (`left >= right`) is a no-op.
///
/// Panics if `right` is out of bounds for a non-empty range.
pub fn sort_range<T>(arr: &mut [T], left: usize, right: usize)
where
    T: Ord,
{
    if left >= right {
        return;
    }

    sort(&mut arr[left..=right]);
}

// --- IMPL ---

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorted input produces maximally unbalanced partitions, recursing would mean a call depth
    // of `v.len()`. Pending ranges are kept on the heap instead.
    let mut pending = vec![(0, v.len())];

    while let Some((start, end)) = pending.pop() {
        if end - start < 2 {
            continue;
        }

        let pivot_pos = start + partition(&mut v[start..end], is_less);

        pending.push((pivot_pos + 1, end));
        pending.push((start, pivot_pos));
    }
}

/// Lomuto partition around the last element of `v`.
///
/// Afterwards every element left of the returned position is not greater than the pivot, the
/// pivot sits at the returned position and everything right of it compares greater.
pub fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let (rest, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    // Number of elements known to be `<= pivot`, i.e. the textbook `i + 1`.
    let mut num_le = 0;
    for j in 0..rest.len() {
        if !is_less(pivot, &rest[j]) {
            rest.swap(num_le, j);
            num_le += 1;
        }
    }

    v.swap(num_le, len - 1);

    num_le
}
