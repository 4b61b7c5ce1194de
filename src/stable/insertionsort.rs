//! Straight insertion sort, shifting each element left past its larger predecessors.
//!
//! Also serves as the small-range sort of [`crate::introsort`] and the run sort of
//! [`crate::timsort`].

use std::cmp::Ordering;

use crate::primitives::is_less_from_cmp;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Insertionsort);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, Bounds::full(), &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, Bounds::full(), &mut is_less_from_cmp(compare));
}

#[inline]
pub fn sort_range_by<T, F>(v: &mut [T], bounds: impl Into<Bounds>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, bounds.into(), &mut is_less_from_cmp(compare));
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn stable_sort<T, F>(v: &mut [T], bounds: Bounds, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if let Some((start, end)) = bounds.resolve(v.len()) {
        insertion_sort(v, start, end, is_less);
    }
}

/// Sorts `v[start..=end]`. *O*(*n*) for presorted input, *O*(*n*^2) otherwise.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], start: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for right in (start + 1)..=end {
        let mut left = right;
        while left > start && is_less(&v[left], &v[left - 1]) {
            v.swap(left - 1, left);
            left -= 1;
        }
    }
}
