pub(crate) mod common;
pub(crate) mod heap_sort;
pub(crate) mod insertion_sort;
pub(crate) mod merge_sort;
pub(crate) mod nth_element;
pub(crate) mod quick_sort;
