use std::cmp::Ordering;

pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, T::cmp);
}

/// In-place heap sort over a max-heap, `O(n log n)`, unstable.
pub fn heap_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for start in (0..len / 2).rev() {
        sift_down(data, start, len, &mut cmp);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, &mut cmp);
    }
}

fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && cmp(&data[child], &data[child + 1]) == Ordering::Less {
            swap_idx = child + 1;
        }

        if cmp(&data[root], &data[swap_idx]) != Ordering::Less {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}
