// Repeated minimum selection, O(N^2) comparisons and at most N - 1 swaps.
pub mod selection_sort;

// Lomuto partition with the last element as pivot.
pub mod quicksort;
