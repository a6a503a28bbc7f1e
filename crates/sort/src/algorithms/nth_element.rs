use std::cmp::Ordering;

use super::common;
use crate::{SortError, TUNED_PARAMS};

pub fn nth_element<T: Ord>(data: &mut [T], index: usize) -> Result<&T, SortError> {
    nth_element_by(data, index, T::cmp)
}

/// Rearranges `data` so that `data[index]` is the element a full sort would
/// put there, with nothing greater before it and nothing smaller after it.
///
/// Pivots are chosen by median of medians, so the worst case is linear.
pub fn nth_element_by<T, F>(data: &mut [T], index: usize, mut cmp: F) -> Result<&T, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if index >= data.len() {
        return Err(SortError::IndexOutOfRange {
            index,
            len: data.len(),
        });
    }
    select(data, index, &mut cmp);
    Ok(&data[index])
}

fn select<T, F>(mut data: &mut [T], mut index: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        if data.len() <= TUNED_PARAMS.select_cutoff {
            common::insertion_sort_by(data, cmp);
            return;
        }

        let pivot = median_of_medians(data, cmp);
        let (lt, gt) = common::partition_3way_by(data, pivot, cmp);

        if index < lt {
            data = &mut data[..lt];
        } else if index < gt {
            return;
        } else {
            index -= gt;
            data = &mut data[gt..];
        }
    }
}

/// Moves the median of every group to the front and selects the median of
/// those. Returns the pivot's position.
fn median_of_medians<T, F>(data: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let group = TUNED_PARAMS.median_group_size;
    let mut groups = 0;
    for start in (0..data.len()).step_by(group) {
        let end = (start + group).min(data.len());
        common::insertion_sort_by(&mut data[start..end], cmp);
        data.swap(groups, start + (end - start) / 2);
        groups += 1;
    }

    let mid = groups / 2;
    select(&mut data[..groups], mid, cmp);
    mid
}
