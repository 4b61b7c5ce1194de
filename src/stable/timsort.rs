//! Run based hybrid sort.
//!
//! The range is cut into runs of [`RUN_LEN`] elements which are insertion sorted in place. Adjacent
//! runs are then merged pairwise, doubling the run width each round until a single run spans the
//! range. Runs are always aligned to `start + k * width`.

use std::cmp::Ordering;
use std::mem;

use crate::primitives::is_less_from_cmp;
use crate::primitives::merge::merge_by;
use crate::stable::insertionsort::insertion_sort;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Timsort);

/// Length of the insertion sorted runs.
pub const RUN_LEN: usize = 32;

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

    run_merge_sort(v, start, end, is_less);
}

fn run_merge_sort<T, F>(v: &mut [T], start: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = end - start + 1;

    let mut run_start = start;
    while run_start <= end {
        let run_end = (run_start + RUN_LEN - 1).min(end);
        insertion_sort(v, run_start, run_end, is_less);
        run_start += RUN_LEN;
    }

    if len <= RUN_LEN {
        return;
    }

    let mut buf = Vec::with_capacity(len / 2);

    let mut width = RUN_LEN;
    while width < len {
        // Merge `left..left + width` with the run following it, if there is one. A trailing run
        // without a partner is carried into the next round unchanged.
        let mut left = start;
        while left + width <= end {
            let pivot = left + width;
            let right = (pivot + width - 1).min(end);

            merge_by(v, left, pivot, right, &mut buf, is_less);

            left += 2 * width;
        }

        width *= 2;
    }
}
