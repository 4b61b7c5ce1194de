//! Bubble sort with early exit once a pass performs no swap.

use std::cmp::Ordering;

use crate::primitives::is_less_from_cmp;
use crate::{Algorithm, Bounds};

sort_impl!(Algorithm::Bubblesort);

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
    let Some((start, end)) = bounds.resolve(v.len()) else {
        return;
    };

    // After each pass the largest remaining element sits at `last`.
    let mut last = end;
    while last > start {
        let mut swapped = false;

        for i in start..last {
            // Only strictly smaller elements move left, equal neighbours stay in order.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        last -= 1;
    }
}
