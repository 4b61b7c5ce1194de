//! Quicksort with the middle element as pivot.
//!
//! *O*(*n*^2) worst-case, see [`crate::introsort`] for the guarded variant. Only the shorter
//! partition is sorted recursively, the longer one is handled by the loop, which bounds the stack
//! depth to `log2(n)` frames regardless of input.

use std::cmp::Ordering;

use crate::primitives::is_less_from_cmp;
use crate::primitives::partition::hoare_partition;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Quicksort);

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
    if let Some((start, end)) = bounds.resolve(v.len()) {
        quicksort(v, start, end, is_less);
    }
}

fn quicksort<T, F>(v: &mut [T], mut start: usize, mut end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while start < end {
        let split = hoare_partition(v, start, end, is_less);

        // `start..split` and `split..=end` are both non-empty.
        if split - start < end + 1 - split {
            quicksort(v, start, split - 1, is_less);
            start = split;
        } else {
            quicksort(v, split, end, is_less);
            end = split - 1;
        }
    }
}
