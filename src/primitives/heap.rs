//! Binary max-heap embedded in a sub-range of a slice.
//!
//! The heap root sits at `offset`, so the children of `node` are found at
//! `2 * (node - offset) + 1 + offset` and the index after it. This allows heapsort to keep the
//! heap anchored at the start of its range while the active part shrinks from the right.

use std::cmp::Ordering;

use crate::error::{check_range, ContractViolation};
use crate::primitives::is_less_from_cmp;

/// Rearranges `v[left..=right]` into a max-heap rooted at `left`.
///
/// `length` has to be `right - left + 1`. Elements outside of the range are not touched.
pub fn build_max_heap<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    length: usize,
    compare: F,
) -> Result<(), ContractViolation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_range(left, right, v.len())?;

    let expected = right - left + 1;
    if length != expected {
        return Err(ContractViolation::HeapLengthMismatch { length, expected });
    }

    build_max_heap_by(v, left, right, &mut is_less_from_cmp(compare));

    Ok(())
}

/// Restores the heap property for the subtree rooted at `root`, assuming both child subtrees are
/// valid heaps already. `offset` is the index of heap position 0 and `right` the last index that
/// belongs to the heap.
pub fn heapify<T, F>(
    v: &mut [T],
    root: usize,
    right: usize,
    offset: usize,
    compare: F,
) -> Result<(), ContractViolation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_range(root, right, v.len())?;

    if offset > root {
        return Err(ContractViolation::OffsetPastRoot { offset, root });
    }

    sift_down(v, root, right, offset, &mut is_less_from_cmp(compare));

    Ok(())
}

pub(crate) fn build_max_heap_by<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let length = right - left + 1;

    // Every index past the last parent is a leaf and trivially a heap.
    for root in (left..left + length / 2).rev() {
        sift_down(v, root, right, left, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
pub(crate) fn sift_down<T, F>(
    v: &mut [T],
    mut node: usize,
    right: usize,
    offset: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(offset <= node && right < v.len());

    loop {
        // Children of `node`.
        let left_child = 2 * (node - offset) + 1 + offset;
        if left_child > right {
            break;
        }
        let right_child = left_child + 1;

        let mut largest = node;
        if is_less(&v[largest], &v[left_child]) {
            largest = left_child;
        }
        if right_child <= right && is_less(&v[largest], &v[right_child]) {
            largest = right_child;
        }

        // Stop if the invariant holds at `node`.
        if largest == node {
            break;
        }

        v.swap(node, largest);
        node = largest;
    }
}
