pub mod heapsort;
pub mod introsort;
pub mod quicksort;
pub mod selectionsort;
pub mod shellsort;
