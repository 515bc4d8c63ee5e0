search_impl!("interpolation_search", requires_sorted = true);

/// Values that can be placed on a number line for interpolation.
pub trait Interpolate: Ord {
    /// `self - base`, widened so that the difference and its product with any slice length
    /// can't overflow.
    fn distance_from(&self, base: &Self) -> i128;
}

macro_rules! impl_interpolate {
    ($($t:ty),*) => {
        $(
            impl Interpolate for $t {
                #[inline]
                fn distance_from(&self, base: &Self) -> i128 {
                    *self as i128 - *base as i128
                }
            }
        )*
    };
}

impl_interpolate!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

/// Searches the ascending slice `arr` for `key` by estimating its position from the values at
/// the window bounds.
///
/// Returns the index of some element equal to `key`, not necessarily the first one. If `arr` is
/// not sorted the result is unspecified, but a returned index always holds `key`.
///
/// Average *O*(log log *n*) probes on uniformly distributed values, *O*(*n*) worst-case.
pub fn search<T>(arr: &[T], key: &T) -> Option<usize>
where
    T: Interpolate,
{
    if arr.is_empty() {
        return None;
    }

    let mut low = 0;
    let mut high = arr.len() - 1;

    while low <= high && *key >= arr[low] && *key <= arr[high] {
        let span = arr[high].distance_from(&arr[low]);

        // With `arr[low] <= key <= arr[high]` a zero span means the whole window equals `key`.
        // This also covers `low == high`, and keeps duplicate runs from dividing by zero.
        if span == 0 {
            return Some(low);
        }

        let offset = key.distance_from(&arr[low]) * (high - low) as i128 / span;
        let pos = low + offset as usize;

        match arr[pos].cmp(key) {
            std::cmp::Ordering::Equal => return Some(pos),
            std::cmp::Ordering::Less => low = pos + 1,
            // `arr[low] <= key < arr[pos]` implies `pos > low`, so this can't underflow.
            std::cmp::Ordering::Greater => high = pos - 1,
        }
    }

    None
}
