/// Strict ordering used by [`IndexedHeap`](crate::IndexedHeap).
///
/// `precedes(a, b)` is true when `a` must sit closer to the root than `b`.
pub trait HeapOrder<K> {
    fn precedes(a: &K, b: &K) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MinOrder;

impl<K: Ord> HeapOrder<K> for MinOrder {
    #[inline(always)]
    fn precedes(a: &K, b: &K) -> bool {
        a < b
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOrder;

impl<K: Ord> HeapOrder<K> for MaxOrder {
    #[inline(always)]
    fn precedes(a: &K, b: &K) -> bool {
        a > b
    }
}
