//! Selection sort, repeatedly moves the minimum of the unsorted suffix to its front.

use std::cmp::Ordering;

sort_impl!("selection_sort_unstable");

/// Sorts the slice with *O*(*n*^2) comparisons and at most `len - 1` swaps.
///
/// Equal elements keep the earliest-seen minimum, but the swap into place can still reorder
/// them, so this sort is unstable.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    selection_sort(arr, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Same as [`sort_by`], but returns how many swaps were performed.
pub fn sort_by_counting_swaps<T, F>(arr: &mut [T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less)
}

// --- IMPL ---

/// Returns the number of swaps, a minimum already in place is not swapped.
fn selection_sort<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let mut swaps = 0;
    for i in 0..(len - 1) {
        let min_pos = min_index(&v[i..], is_less) + i;
        if min_pos != i {
            v.swap(i, min_pos);
            swaps += 1;
        }
    }

    swaps
}

/// Index of the first minimum in `v`. `v` must not be empty.
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min_pos = 0;
    for j in 1..v.len() {
        if is_less(&v[j], &v[min_pos]) {
            min_pos = j;
        }
    }

    min_pos
}
