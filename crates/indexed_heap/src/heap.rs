use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::HeapError;
use crate::policy::{HeapOrder, MinOrder};

/// Binary heap that tracks the slot of every key, enabling
/// [`decrease_key`](IndexedHeap::decrease_key) in `O(log n)`.
///
/// Keys must be unique. Pushing a key that is already present corrupts the
/// position index; debug builds assert against it.
#[derive(Clone, Debug)]
pub struct IndexedHeap<K, O = MinOrder> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    _order: PhantomData<O>,
}

impl<K, O> Default for IndexedHeap<K, O>
where
    K: Clone + Eq + Hash,
    O: HeapOrder<K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, O> IndexedHeap<K, O>
where
    K: Clone + Eq + Hash,
    O: HeapOrder<K>,
{
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            _order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    /// Builds the heap bottom-up in `O(n)`.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let keys: Vec<K> = keys.into_iter().collect();
        let index: HashMap<K, usize> = keys
            .iter()
            .enumerate()
            .map(|(pos, key)| (key.clone(), pos))
            .collect();
        debug_assert_eq!(index.len(), keys.len(), "indexed heap keys must be unique");

        let mut heap = Self {
            keys,
            index,
            _order: PhantomData,
        };
        for pos in (0..heap.keys.len() / 2).rev() {
            heap.sift_down(pos);
        }
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current slot of `key` in the underlying array.
    #[inline]
    pub fn position(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.index.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
    }

    pub fn top(&self) -> Result<&K, HeapError> {
        self.keys.first().ok_or(HeapError::Empty)
    }

    pub fn push(&mut self, key: K) {
        debug_assert!(!self.index.contains_key(&key), "duplicate key pushed");
        let pos = self.keys.len();
        self.index.insert(key.clone(), pos);
        self.keys.push(key);
        self.sift_up(pos);
    }

    pub fn pop(&mut self) -> Result<K, HeapError> {
        if self.keys.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.keys.len() - 1;
        self.swap(0, last);
        let Some(key) = self.keys.pop() else {
            return Err(HeapError::Empty);
        };
        self.index.remove(&key);
        if !self.keys.is_empty() {
            self.sift_down(0);
        }
        Ok(key)
    }

    /// Replaces `old` with `new` in place and restores heap order.
    ///
    /// Does nothing and returns `false` when `old` is absent or `new` does not
    /// strictly precede `old`.
    pub fn decrease_key(&mut self, old: &K, new: K) -> bool {
        let Some(&pos) = self.index.get(old) else {
            return false;
        };
        if !O::precedes(&new, old) {
            return false;
        }
        debug_assert!(!self.index.contains_key(&new), "decrease_key target already present");

        self.index.remove(old);
        self.index.insert(new.clone(), pos);
        self.keys[pos] = new;
        self.sift_up(pos);
        true
    }

    /// Drains the heap in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.keys.len());
        while let Ok(key) = self.pop() {
            out.push(key);
        }
        out
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.keys.swap(a, b);
        if let Some(pos) = self.index.get_mut(&self.keys[a]) {
            *pos = a;
        }
        if let Some(pos) = self.index.get_mut(&self.keys[b]) {
            *pos = b;
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !O::precedes(&self.keys[pos], &self.keys[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.keys.len();
        loop {
            let left = pos * 2 + 1;
            if left >= len {
                break;
            }

            // Left is examined first; a later candidate wins only if strictly better.
            let mut best = pos;
            if O::precedes(&self.keys[left], &self.keys[best]) {
                best = left;
            }
            let right = left + 1;
            if right < len && O::precedes(&self.keys[right], &self.keys[best]) {
                best = right;
            }
            if best == pos {
                break;
            }

            self.swap(pos, best);
            pos = best;
        }
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> &HashMap<K, usize> {
        &self.index
    }
}

impl<K, O> FromIterator<K> for IndexedHeap<K, O>
where
    K: Clone + Eq + Hash,
    O: HeapOrder<K>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K, O> Extend<K> for IndexedHeap<K, O>
where
    K: Clone + Eq + Hash,
    O: HeapOrder<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}
