//! Shell sort with the halving gap sequence `n / 2, n / 4, .., 1`.

use std::cmp::Ordering;

use crate::primitives::is_less_from_cmp;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Shellsort);

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

    let len = end - start + 1;

    let mut gap = len / 2;
    while gap >= 1 {
        // Gapped insertion sort, the final pass with gap 1 is a plain insertion sort.
        for right in (start + gap)..=end {
            let mut left = right;
            while left >= start + gap && is_less(&v[left], &v[left - gap]) {
                v.swap(left - gap, left);
                left -= gap;
            }
        }

        gap /= 2;
    }
}
