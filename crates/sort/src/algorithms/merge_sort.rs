use std::cmp::Ordering;

use super::common;
use crate::TUNED_PARAMS;

pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    merge_sort_by(data, T::cmp);
}

/// Stable top-down merge sort with one scratch copy of the input.
pub fn merge_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }
    let mut buf = data.to_vec();
    merge_sort_recursive(&mut buf, data, &mut cmp);
}

// `src` and `dst` hold the same elements on entry; `dst` ends up sorted.
fn merge_sort_recursive<T, F>(src: &mut [T], dst: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = dst.len();
    if len <= TUNED_PARAMS.insertion_threshold {
        common::insertion_sort_by(dst, cmp);
        return;
    }

    let mid = len / 2;
    {
        let (src_left, src_right) = src.split_at_mut(mid);
        let (dst_left, dst_right) = dst.split_at_mut(mid);
        merge_sort_recursive(dst_left, src_left, cmp);
        merge_sort_recursive(dst_right, src_right, cmp);
    }

    if cmp(&src[mid - 1], &src[mid]) != Ordering::Greater {
        dst.clone_from_slice(src);
        return;
    }
    merge(src, mid, dst, cmp);
}

fn merge<T, F>(src: &[T], mid: usize, dst: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (left, right) = src.split_at(mid);
    let (mut i, mut j) = (0, 0);

    for slot in dst.iter_mut() {
        // ties take from the left run
        let take_left = j == right.len()
            || (i < left.len() && cmp(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}
