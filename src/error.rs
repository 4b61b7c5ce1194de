//! Contract violations reported by the index-taking primitives.
//!
//! The sort entry points resolve their [`Bounds`](crate::Bounds) by clamping and can therefore not
//! fail. The primitives in [`crate::primitives`] take raw indices instead, and validate all of them
//! before the slice is touched.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error returned when a primitive is called with indices that break its contract.
///
/// No mutation has happened when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// An index lies outside of the slice.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the slice.
        len: usize,
    },

    /// `left` is past `right`.
    InvertedRange { left: usize, right: usize },

    /// The merge split point does not lie within `left..=right + 1`.
    PivotOutOfRange {
        pivot: usize,
        left: usize,
        right: usize,
    },

    /// The heap offset lies after the root that should be repaired.
    OffsetPastRoot { offset: usize, root: usize },

    /// The heap length does not describe `left..=right`.
    HeapLengthMismatch { length: usize, expected: usize },
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ContractViolation::IndexOutOfBounds { index, len } => {
                write!(f, "Contract violation: index {index} out of bounds for length {len}")
            }
            ContractViolation::InvertedRange { left, right } => {
                write!(f, "Contract violation: range start {left} is past range end {right}")
            }
            ContractViolation::PivotOutOfRange { pivot, left, right } => write!(
                f,
                "Contract violation: merge pivot {pivot} outside of {left}..={}",
                right + 1
            ),
            ContractViolation::OffsetPastRoot { offset, root } => {
                write!(f, "Contract violation: heap offset {offset} is past root {root}")
            }
            ContractViolation::HeapLengthMismatch { length, expected } => write!(
                f,
                "Contract violation: heap length {length} does not match range length {expected}"
            ),
        }
    }
}

impl Error for ContractViolation {}

/// Fails unless `index` addresses an element of a slice with length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> std::result::Result<(), ContractViolation> {
    if index >= len {
        return Err(ContractViolation::IndexOutOfBounds { index, len });
    }

    Ok(())
}

/// Fails unless `left..=right` is a non-inverted range inside a slice with length `len`.
pub(crate) fn check_range(
    left: usize,
    right: usize,
    len: usize,
) -> std::result::Result<(), ContractViolation> {
    check_index(right, len)?;

    if left > right {
        return Err(ContractViolation::InvertedRange { left, right });
    }

    Ok(())
}
