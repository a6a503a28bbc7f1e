mod algorithms;
mod error;

pub use algorithms::heap_sort::{heap_sort, heap_sort_by};
pub use algorithms::insertion_sort::{insertion_sort, insertion_sort_by};
pub use algorithms::merge_sort::{merge_sort, merge_sort_by};
pub use algorithms::nth_element::{nth_element, nth_element_by};
pub use algorithms::quick_sort::{quick_sort, quick_sort_by, quick_sort_by_with_rng};
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 4] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::HeapSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::HeapSort => "heap_sort",
    }
}

pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::InsertionSort | SortAlgorithm::MergeSort)
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges this short are insertion sorted by merge and quick sort.
    pub insertion_threshold: usize,
    pub median_group_size: usize,
    /// Ranges this short are sorted outright by nth element.
    pub select_cutoff: usize,
    pub pivot_seed: u64,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 24,
    median_group_size: 5,
    select_cutoff: 10,
    pivot_seed: 0x5EED_2026,
};

pub fn sort_by_algorithm<T: Ord + Clone>(algo: SortAlgorithm, data: &mut [T]) {
    match algo {
        SortAlgorithm::InsertionSort => insertion_sort(data),
        SortAlgorithm::MergeSort => merge_sort(data),
        SortAlgorithm::QuickSort => quick_sort(data),
        SortAlgorithm::HeapSort => heap_sort(data),
    }
}
