//! Heapsort, *O*(*n* \* log(*n*)) worst-case and no extra memory.

use std::cmp::Ordering;

use crate::primitives::heap::{build_max_heap_by, sift_down};
use crate::primitives::is_less_from_cmp;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Heapsort);

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
        heapsort(v, start, end, is_less);
    }
}

/// Sorts `v[start..=end]`. The caller has to guarantee `start < end`.
///
/// Also the worst-case fallback of introsort.
pub(crate) fn heapsort<T, F>(v: &mut [T], start: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(start < end);

    // Build the heap in linear time.
    build_max_heap_by(v, start, end, is_less);

    // Pop maximal elements from the heap, the sorted tail grows from the right.
    for i in ((start + 1)..=end).rev() {
        v.swap(start, i);
        sift_down(v, start, i - 1, start, is_less);
    }
}
