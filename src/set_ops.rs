use std::hash::Hash;

use fxhash::FxHashSet;

/// Distinct values of `a` that appear nowhere in `b`, in order of their first occurrence in `a`.
///
/// Set semantics, not multiset subtraction: `[1, 1, 2]` minus `[2]` is `[1]`.
pub fn unique_to<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let exclude = b.iter().collect::<FxHashSet<_>>();
    let mut seen = FxHashSet::default();

    a.iter()
        .filter(|val| !exclude.contains(val) && seen.insert(*val))
        .cloned()
        .collect()
}

/// Both directions of the set difference, `(a \ b, b \ a)`.
pub fn symmetric_unique<T>(a: &[T], b: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Eq + Hash + Clone,
{
    (unique_to(a, b), unique_to(b, a))
}
