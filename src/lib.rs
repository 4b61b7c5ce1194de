//! Comparison based sorts that can be restricted to an inclusive sub-range of a slice.
//!
//! Every algorithm lives in its own module and exposes the same three entry points, `sort`,
//! `sort_by` and `sort_range_by`, plus a `SortImpl` type implementing [`Sort`]. Sorting happens in
//! place, elements outside of the resolved [`Bounds`] are never moved.
//!
//! Stable: [`bubblesort`], [`insertionsort`], [`mergesort`], [`timsort`].
//! Unstable: [`heapsort`], [`introsort`], [`quicksort`], [`selectionsort`], [`shellsort`].

use std::cmp::Ordering;
use std::fmt;

macro_rules! sort_impl {
    ($algorithm:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            const ALGORITHM: crate::Algorithm = $algorithm;

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }

            #[inline]
            fn sort_range_by<T, F>(v: &mut [T], bounds: crate::Bounds, compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_range_by(v, bounds, compare);
            }
        }
    };
}

mod bounds;
mod error;
pub mod patterns;
pub mod primitives;
pub mod stable;
pub mod unstable;

pub use bounds::Bounds;
pub use error::ContractViolation;
pub use stable::{bubblesort, insertionsort, mergesort, timsort};
pub use unstable::{heapsort, introsort, quicksort, selectionsort, shellsort};

/// Common interface of all sorts in this crate.
pub trait Sort {
    const ALGORITHM: Algorithm;

    fn name() -> String {
        Self::ALGORITHM.name().into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort_range_by<T, F>(v: &mut [T], bounds: Bounds, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Returns a copy of `v` sorted over `bounds`, leaving `v` as is.
    fn sorted_range_by<T, F>(v: &[T], bounds: Bounds, compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = v.to_vec();
        Self::sort_range_by(&mut sorted, bounds, compare);

        sorted
    }
}

/// Runtime handle for every sort in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubblesort,
    Heapsort,
    Insertionsort,
    Introsort,
    Mergesort,
    Quicksort,
    Selectionsort,
    Shellsort,
    Timsort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubblesort,
        Algorithm::Heapsort,
        Algorithm::Insertionsort,
        Algorithm::Introsort,
        Algorithm::Mergesort,
        Algorithm::Quicksort,
        Algorithm::Selectionsort,
        Algorithm::Shellsort,
        Algorithm::Timsort,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubblesort => "bubblesort_stable",
            Algorithm::Heapsort => "heapsort_unstable",
            Algorithm::Insertionsort => "insertionsort_stable",
            Algorithm::Introsort => "introsort_unstable",
            Algorithm::Mergesort => "mergesort_stable",
            Algorithm::Quicksort => "quicksort_unstable",
            Algorithm::Selectionsort => "selectionsort_unstable",
            Algorithm::Shellsort => "shellsort_unstable",
            Algorithm::Timsort => "timsort_stable",
        }
    }

    /// Whether equal elements keep their relative order.
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubblesort
                | Algorithm::Insertionsort
                | Algorithm::Mergesort
                | Algorithm::Timsort
        )
    }

    /// Whether the average case is already *O*(*n*^2).
    pub const fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Bubblesort | Algorithm::Insertionsort | Algorithm::Selectionsort
        )
    }

    pub fn sort<T>(self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_range_by(v, Bounds::full(), |a: &T, b: &T| a.cmp(b));
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_range_by(v, Bounds::full(), compare);
    }

    pub fn sort_range_by<T, F>(self, v: &mut [T], bounds: impl Into<Bounds>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubblesort => bubblesort::sort_range_by(v, bounds, compare),
            Algorithm::Heapsort => heapsort::sort_range_by(v, bounds, compare),
            Algorithm::Insertionsort => insertionsort::sort_range_by(v, bounds, compare),
            Algorithm::Introsort => introsort::sort_range_by(v, bounds, compare),
            Algorithm::Mergesort => mergesort::sort_range_by(v, bounds, compare),
            Algorithm::Quicksort => quicksort::sort_range_by(v, bounds, compare),
            Algorithm::Selectionsort => selectionsort::sort_range_by(v, bounds, compare),
            Algorithm::Shellsort => shellsort::sort_range_by(v, bounds, compare),
            Algorithm::Timsort => timsort::sort_range_by(v, bounds, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
