//! Top-down merge sort.
//!
//! The range is split at `ceil((start + end) / 2)`, both halves are sorted recursively and then
//! merged. Splits are always balanced, so the recursion depth is `ceil(log2(n))`. A single scratch
//! buffer of half the range length is allocated per call and reused by every merge.

use std::cmp::Ordering;
use std::mem;

use crate::primitives::is_less_from_cmp;
use crate::primitives::merge::merge_by;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Mergesort);

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
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let Some((start, end)) = bounds.resolve(v.len()) else {
        return;
    };

    // The shorter of two merged halves never exceeds half the range.
    let mut buf = Vec::with_capacity((end - start + 1) / 2);

    merge_sort(v, start, end, &mut buf, is_less);
}

fn merge_sort<T, F>(v: &mut [T], start: usize, end: usize, buf: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if end <= start {
        return;
    }

    let pivot = (start + end + 1) / 2;

    merge_sort(v, start, pivot - 1, buf, is_less);
    merge_sort(v, pivot, end, buf, is_less);
    merge_by(v, start, pivot, end, buf, is_less);
}
