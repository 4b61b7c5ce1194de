//! Building blocks shared by the hybrid sorts.
//!
//! The public functions take explicit inclusive indices, validate them and only then touch the
//! slice. The sorts use the unchecked `pub(crate)` forms with indices they resolved themselves.

pub mod heap;
pub mod merge;
pub mod partition;

use std::cmp::Ordering;

/// Turns a three-way comparison into the `is_less` form used internally.
#[inline]
pub(crate) fn is_less_from_cmp<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| compare(a, b) == Ordering::Less
}
