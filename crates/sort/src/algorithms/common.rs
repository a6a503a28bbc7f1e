use std::cmp::Ordering;

/// Stable insertion sort. Used directly and as the small-range fallback of
/// the divide-and-conquer sorts.
pub fn insertion_sort_by<T, F>(data: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && cmp(&data[j - 1], &data[j]) == Ordering::Greater {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[inline]
pub fn median3_index<T, F>(data: &[T], a: usize, b: usize, c: usize, cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let lt = |x: usize, y: usize, cmp: &mut F| cmp(&data[x], &data[y]) == Ordering::Less;
    if lt(a, b, cmp) {
        if lt(b, c, cmp) {
            b
        } else if lt(a, c, cmp) {
            c
        } else {
            a
        }
    } else if lt(a, c, cmp) {
        a
    } else if lt(b, c, cmp) {
        c
    } else {
        b
    }
}

/// Three-way partition around `data[pivot]`.
///
/// Returns `(lt, gt)`: `data[..lt]` is less than the pivot, `data[lt..gt]`
/// equal to it (never empty), `data[gt..]` greater.
pub fn partition_3way_by<T, F>(data: &mut [T], pivot: usize, cmp: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.swap(0, pivot);
    // data[lt..i] holds pivot-equal elements, data[lt] is the reference
    let mut lt = 0;
    let mut i = 1;
    let mut gt = data.len();

    while i < gt {
        match cmp(&data[i], &data[lt]) {
            Ordering::Less => {
                data.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                data.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}
