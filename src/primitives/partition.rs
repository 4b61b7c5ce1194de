//! Hoare partition around the middle element of a range.

use std::cmp::Ordering;

use crate::error::{check_range, ContractViolation};
use crate::primitives::is_less_from_cmp;

/// Partitions `v[left..=right]` around the value initially found at `(left + right) / 2`.
///
/// Returns the split index `split`. Afterwards every element in `left..split` compares less or
/// equal to the pivot value and every element in `split..=right` compares greater or equal. The
/// pivot itself may end up on either side, and elements equal to the pivot may land on both.
pub fn partition<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    compare: F,
) -> Result<usize, ContractViolation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_range(left, right, v.len())?;

    Ok(hoare_partition(v, left, right, &mut is_less_from_cmp(compare)))
}

pub(crate) fn hoare_partition<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // The pivot is compared by position instead of holding a copy, so follow it through swaps.
    let mut pivot = left + (right - left) / 2;

    let mut l = left;
    let mut r = right;

    while l <= r {
        // The range checks never trigger for a total order, they only keep a broken comparison
        // function from walking out of the range.
        while l < right && is_less(&v[l], &v[pivot]) {
            l += 1;
        }
        while r > left && is_less(&v[pivot], &v[r]) {
            r -= 1;
        }

        if l <= r {
            v.swap(l, r);

            if pivot == l {
                pivot = r;
            } else if pivot == r {
                pivot = l;
            }

            l += 1;
            if r == 0 {
                break;
            }
            r -= 1;
        }
    }

    if right > left {
        // Both sides are non-empty for a total order. Enforcing it keeps the callers making
        // progress even if the order is violated.
        l.clamp(left + 1, right)
    } else {
        l
    }
}
