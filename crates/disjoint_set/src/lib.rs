const NO_PARENT: usize = usize::MAX;

/// Union-find over the identifiers `0..len()`, with path compression and
/// union by size.
///
/// Identifiers outside the current range yield `None` and leave the
/// structure unchanged.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    set_count: usize,
}

impl DisjointSet {
    /// `n` singleton sets `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![NO_PARENT; n],
            size: vec![1; n],
            set_count: n,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently represented.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Appends a new singleton set and returns its identifier.
    pub fn add_subset(&mut self) -> usize {
        self.parent.push(NO_PARENT);
        self.size.push(1);
        self.set_count += 1;
        self.parent.len() - 1
    }

    pub fn find(&mut self, x: usize) -> Option<usize> {
        if x >= self.parent.len() {
            return None;
        }

        let mut root = x;
        while self.parent[root] != NO_PARENT {
            root = self.parent[root];
        }

        let mut cur = x;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        Some(root)
    }

    /// Merges the sets containing `a` and `b` and returns the new root.
    pub fn union(&mut self, a: usize, b: usize) -> Option<usize> {
        let ra = self.find(a)?;
        let rb = self.find(b)?;
        if ra == rb {
            return Some(ra);
        }

        let (big, small) = if self.size[ra] < self.size[rb] {
            (rb, ra)
        } else {
            (ra, rb)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.set_count -= 1;
        Some(big)
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    pub fn size_of(&mut self, x: usize) -> Option<usize> {
        let root = self.find(x)?;
        Some(self.size[root])
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn relabel(labels: &mut [usize], from: usize, to: usize) {
        for label in labels.iter_mut() {
            if *label == from {
                *label = to;
            }
        }
    }

    #[test]
    fn singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.set_count(), 4);
        for i in 0..4 {
            assert_eq!(ds.find(i), Some(i));
            assert_eq!(ds.size_of(i), Some(1));
        }
        assert!(!ds.same_set(0, 1));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut ds = DisjointSet::new(2);
        assert_eq!(ds.find(2), None);
        assert_eq!(ds.union(0, 5), None);
        assert_eq!(ds.union(5, 0), None);
        assert_eq!(ds.set_count(), 2);
        assert!(!ds.same_set(0, 9));

        let mut empty = DisjointSet::default();
        assert!(empty.is_empty());
        assert_eq!(empty.find(0), None);
    }

    #[test]
    fn union_by_size() {
        let mut ds = DisjointSet::new(5);
        let r = ds.union(0, 1).unwrap();
        let r = ds.union(r, 2).unwrap();
        assert_eq!(ds.size_of(2), Some(3));
        // the smaller set is hung under the larger one
        assert_eq!(ds.union(3, 2), Some(r));
        assert_eq!(ds.size_of(3), Some(4));
        assert_eq!(ds.union(0, 3), Some(r));
        assert_eq!(ds.set_count(), 2);

        let id = ds.add_subset();
        assert_eq!(id, 5);
        assert_eq!(ds.set_count(), 3);
        assert_eq!(ds.find(id), Some(id));
        ds.union(id, 4);
        assert!(ds.same_set(4, 5));
        assert!(!ds.same_set(4, 0));
    }

    #[test]
    fn random_unions_match_naive_labels() {
        let mut rng = StdRng::seed_from_u64(0xD15_2026);
        let n = 200;
        let mut ds = DisjointSet::new(n);
        let mut labels: Vec<usize> = (0..n).collect();

        for _ in 0..600 {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if rng.random_bool(0.4) {
                let (la, lb) = (labels[a], labels[b]);
                relabel(&mut labels, lb, la);
                ds.union(a, b);
            } else {
                assert_eq!(ds.same_set(a, b), labels[a] == labels[b], "a={a} b={b}");
            }
        }

        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(ds.set_count(), distinct.len());
        for x in 0..n {
            let expected = labels.iter().filter(|&&l| l == labels[x]).count();
            assert_eq!(ds.size_of(x), Some(expected));
        }
    }
}
