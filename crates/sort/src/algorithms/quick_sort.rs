use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::common;
use crate::TUNED_PARAMS;

/// Quick sort with the fixed pivot seed from [`TUNED_PARAMS`].
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_by(data, T::cmp);
}

pub fn quick_sort_by<T, F>(data: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut rng = StdRng::seed_from_u64(TUNED_PARAMS.pivot_seed);
    quick_sort_by_with_rng(data, cmp, &mut rng);
}

/// Unstable, in place. The pivot is the median of three positions drawn
/// from `rng`; a three-way partition keeps runs of equal keys linear.
pub fn quick_sort_by_with_rng<T, F, R>(data: &mut [T], mut cmp: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    quick_sort_recursive(data, &mut cmp, rng);
}

fn quick_sort_recursive<T, F, R>(mut data: &mut [T], cmp: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    while data.len() > TUNED_PARAMS.insertion_threshold {
        let len = data.len();
        let (a, b, c) = (
            rng.random_range(0..len),
            rng.random_range(0..len),
            rng.random_range(0..len),
        );
        let pivot = common::median3_index(data, a, b, c, cmp);
        let (lt, gt) = common::partition_3way_by(data, pivot, cmp);

        let (left, rest) = data.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        if left.len() < right.len() {
            quick_sort_recursive(left, cmp, rng);
            data = right;
        } else {
            quick_sort_recursive(right, cmp, rng);
            data = left;
        }
    }

    common::insertion_sort_by(data, cmp);
}
