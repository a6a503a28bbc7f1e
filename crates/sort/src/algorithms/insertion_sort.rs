use std::cmp::Ordering;

use super::common;

pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    insertion_sort_by(data, T::cmp);
}

/// Stable, in place, `O(n^2)`.
pub fn insertion_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    common::insertion_sort_by(data, &mut cmp);
}
