pub mod bubblesort;
pub mod insertionsort;
pub mod mergesort;

// Run based hybrid of insertion sort and merging, without TimSort's galloping or run detection.
pub mod timsort;
