//! Introsort: quicksort with a depth budget and two fallbacks.
//!
//! Ranges of at most [`SMALL_SORT_THRESHOLD`] elements are insertion sorted. Every partition
//! step spends one unit of the depth budget, once a range is reached with the budget exhausted
//! it is heapsorted instead. This keeps the quicksort average case while guaranteeing
//! *O*(*n* \* log(*n*)) worst-case.

use std::cmp::Ordering;

use crate::primitives::is_less_from_cmp;
use crate::primitives::partition::hoare_partition;
use crate::stable::insertionsort::insertion_sort;
use crate::unstable::heapsort::heapsort;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Introsort);

/// Ranges up to this length are insertion sorted.
pub const SMALL_SORT_THRESHOLD: usize = 16;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let limit = default_depth_limit(v.len());
    unstable_sort(v, Bounds::full(), limit, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let limit = default_depth_limit(v.len());
    unstable_sort(v, Bounds::full(), limit, &mut is_less_from_cmp(compare));
}

#[inline]
pub fn sort_range_by<T, F>(v: &mut [T], bounds: impl Into<Bounds>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let limit = default_depth_limit(v.len());
    unstable_sort(v, bounds.into(), limit, &mut is_less_from_cmp(compare));
}

/// Like [`sort_range_by`], with an explicit depth budget instead of [`default_depth_limit`].
///
/// A budget of 0 heapsorts every range longer than [`SMALL_SORT_THRESHOLD`] right away.
#[inline]
pub fn sort_range_with_depth_by<T, F>(
    v: &mut [T],
    bounds: impl Into<Bounds>,
    depth_limit: u32,
    compare: F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, bounds.into(), depth_limit, &mut is_less_from_cmp(compare));
}

/// `2 * floor(log2(len))`, the number of partition levels allowed before heapsort takes over.
///
/// The budget is derived from the length of the whole slice, also when only a sub-range is sorted.
pub fn default_depth_limit(len: usize) -> u32 {
    if len < 2 {
        return 0;
    }

    2 * len.ilog2()
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn unstable_sort<T, F>(v: &mut [T], bounds: Bounds, depth_limit: u32, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if let Some((start, end)) = bounds.resolve(v.len()) {
        introsort(v, start, end, depth_limit, is_less);
    }
}

fn introsort<T, F>(
    v: &mut [T],
    mut start: usize,
    mut end: usize,
    mut depth_limit: u32,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    while end > start {
        let len = end - start + 1;

        if len <= SMALL_SORT_THRESHOLD {
            insertion_sort(v, start, end, is_less);
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if depth_limit == 0 {
            heapsort(v, start, end, is_less);
            return;
        }

        depth_limit -= 1;

        let split = hoare_partition(v, start, end, is_less);

        // Recurse into the shorter side and loop on the longer one, the stack stays within
        // `log2(n)` frames whatever the budget.
        if split - start < end + 1 - split {
            introsort(v, start, split - 1, depth_limit, is_less);
            start = split;
        } else {
            introsort(v, split, end, depth_limit, is_less);
            end = split - 1;
        }
    }
}
