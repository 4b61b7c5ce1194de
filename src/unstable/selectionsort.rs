//! Selection sort. Always *O*(*n*^2) comparisons, but at most `n - 1` swaps.

use std::cmp::Ordering;

use crate::primitives::is_less_from_cmp;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Selectionsort);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, Bounds::full(), &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, Bounds::full(), &mut is_less_from_cmp(compare));
}

#[inline]
pub fn sort_range_by<T, F>(v: &mut [T], bounds: impl Into<Bounds>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, bounds.into(), &mut is_less_from_cmp(compare));
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn unstable_sort<T, F>(v: &mut [T], bounds: Bounds, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some((start, end)) = bounds.resolve(v.len()) else {
        return;
    };

    for left in start..end {
        let mut smallest = left;
        for right in (left + 1)..=end {
            if is_less(&v[right], &v[smallest]) {
                smallest = right;
            }
        }

        // Swapping the minimum forward can jump it over equal elements, hence unstable.
        v.swap(left, smallest);
    }
}
