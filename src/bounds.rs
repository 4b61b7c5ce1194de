use std::ops::{Range, RangeFull, RangeInclusive};

/// Inclusive sub-range of a slice that a sort should be restricted to.
///
/// Both ends are optional and signed. A missing or negative `start` means the first element, a
/// missing `end` or one past the slice means the last element. Bounds never fail to resolve, a
/// range that ends up holding fewer than two elements turns the sort into a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub start: Option<isize>,
    pub end: Option<isize>,
}

impl Bounds {
    /// The whole slice.
    pub const fn full() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// `start..=end`, both inclusive.
    pub const fn new(start: isize, end: isize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// `start..=last`.
    pub const fn from_start(start: isize) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// `first..=end`.
    pub const fn to_end(end: isize) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Clamps the bounds to a slice of length `len`.
    ///
    /// Returns the inclusive `(start, end)` pair, or `None` if the clamped range holds fewer than
    /// two elements. In that case the slice is already sorted over the range.
    pub fn resolve(self, len: usize) -> Option<(usize, usize)> {
        if len <= 1 {
            return None;
        }

        let last = len - 1;
        let start = self.start.map_or(0, |start| start.max(0) as usize);
        let end = match self.end {
            None => last,
            Some(end) if end < 0 => return None,
            Some(end) => (end as usize).min(last),
        };

        if end <= start {
            return None;
        }

        Some((start, end))
    }
}

impl From<RangeFull> for Bounds {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<RangeInclusive<usize>> for Bounds {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(to_isize(*range.start()), to_isize(*range.end()))
    }
}

impl From<Range<usize>> for Bounds {
    fn from(range: Range<usize>) -> Self {
        // An empty half-open range turns into an inverted inclusive one, which resolves to a
        // no-op.
        Self::new(to_isize(range.start), to_isize(range.end) - 1)
    }
}

// Slices never hold more than isize::MAX elements, so saturating only affects bounds that lie
// past any slice and get clamped anyway.
fn to_isize(val: usize) -> isize {
    isize::try_from(val).unwrap_or(isize::MAX)
}
