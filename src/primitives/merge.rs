//! Stable merge of two adjacent sorted runs.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::error::{check_range, ContractViolation};
use crate::primitives::is_less_from_cmp;

/// Merges the sorted runs `v[left..pivot]` and `v[pivot..=right]` into one sorted run over
/// `v[left..=right]`.
///
/// The merge is stable, on ties the element from the first run is taken first. Either run may be
/// empty, `pivot` has to lie within `left..=right + 1`.
pub fn merge<T, F>(
    v: &mut [T],
    left: usize,
    pivot: usize,
    right: usize,
    compare: F,
) -> Result<(), ContractViolation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_range(left, right, v.len())?;

    if pivot < left || pivot > right + 1 {
        return Err(ContractViolation::PivotOutOfRange { pivot, left, right });
    }

    let mut buf = Vec::new();
    merge_by(v, left, pivot, right, &mut buf, &mut is_less_from_cmp(compare));

    Ok(())
}

/// Same as [`merge`] without validation. `buf` is only used as scratch space, its length is
/// never changed, so the same buffer can be reused across calls.
pub(crate) fn merge_by<T, F>(
    v: &mut [T],
    left: usize,
    pivot: usize,
    right: usize,
    buf: &mut Vec<T>,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(buf.is_empty());

    if mem::size_of::<T>() == 0 {
        // All values of a zero-sized type are indistinguishable.
        return;
    }

    let run = &mut v[left..=right];
    let mid = pivot - left;
    let len = run.len();

    if mid == 0 || mid == len {
        return;
    }

    buf.reserve(mid.min(len - mid));

    // SAFETY: Both runs are non-empty, `mid` is in bounds, `T` is not zero-sized and `buf` can
    // hold a copy of the shorter run.
    unsafe {
        merge_runs(run, mid, buf.as_mut_ptr(), is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// # Safety
///
/// The two runs must be non-empty and `mid` must be in bounds. Buffer `buf` must be long enough
/// to hold a copy of the shorter run. Also, `T` must not be a zero-sized type.
unsafe fn merge_runs<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v_ptr = v.as_mut_ptr();
    let (v_mid, v_end) = (v_ptr.add(mid), v_ptr.add(len));

    // The shorter run is copied into `buf`. Then the copy and the longer run are traced forwards
    // (or backwards), the next unconsumed elements compared and the lesser (or greater) one copied
    // into `v`.
    //
    // `hole` tracks the part of `buf` that was not yet copied back. If the shorter run is consumed
    // first the merge is done. If the longer run is consumed first, or `is_less` panics, dropping
    // `hole` copies the rest of `buf` into the gap left in `v`. Either way `v` ends up holding every
    // element it initially held exactly once.
    let mut hole;

    if mid <= len - mid {
        // The left run is shorter.
        ptr::copy_nonoverlapping(v_ptr, buf, mid);
        hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: v_ptr,
        };

        let left = &mut hole.start;
        let mut right = v_mid;
        let out = &mut hole.dest;

        while *left < hole.end && right < v_end {
            // Consume the lesser side. If equal, prefer the left run to maintain stability.
            let to_copy = if is_less(&*right, &**left) {
                get_and_increment(&mut right)
            } else {
                get_and_increment(left)
            };
            ptr::copy_nonoverlapping(to_copy, get_and_increment(out), 1);
        }
    } else {
        // The right run is shorter.
        ptr::copy_nonoverlapping(v_mid, buf, len - mid);
        hole = MergeHole {
            start: buf,
            end: buf.add(len - mid),
            dest: v_mid,
        };

        let left = &mut hole.dest;
        let right = &mut hole.end;
        let mut out = v_end;

        while v_ptr < *left && buf < *right {
            // Consume the greater side. If equal, prefer the right run to maintain stability.
            let to_copy = if is_less(&*right.sub(1), &*left.sub(1)) {
                decrement_and_get(left)
            } else {
                decrement_and_get(right)
            };
            ptr::copy_nonoverlapping(to_copy, decrement_and_get(&mut out), 1);
        }
    }
    // Finally, `hole` gets dropped.

    unsafe fn get_and_increment<T>(ptr: &mut *mut T) -> *mut T {
        let old = *ptr;
        *ptr = ptr.add(1);
        old
    }

    unsafe fn decrement_and_get<T>(ptr: &mut *mut T) -> *mut T {
        *ptr = ptr.sub(1);
        *ptr
    }

    // When dropped, copies the range `start..end` into `dest..`.
    struct MergeHole<T> {
        start: *mut T,
        end: *mut T,
        dest: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // SAFETY: `T` is not a zero-sized type, and these are pointers into a slice's
            // elements.
            unsafe {
                let len = self.end.offset_from(self.start) as usize;
                ptr::copy_nonoverlapping(self.start, self.dest, len);
            }
        }
    }
}
