#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub value: u32,
    pub weight: u32,
}

impl Item {
    pub const fn new(value: u32, weight: u32) -> Self {
        Self { value, weight }
    }
}

/// 0/1 knapsack with a fixed weight capacity.
#[derive(Clone, Debug)]
pub struct Knapsack {
    capacity: usize,
    weight: usize,
    items: Vec<Item>,
}

impl Knapsack {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            weight: 0,
            items: Vec::new(),
        }
    }

    /// Adds the most valuable subset of `candidates` that fits in the space
    /// still free. Zero-weight items with a value are taken even when the
    /// knapsack is full. Dynamic programming over `(item, capacity)`,
    /// `O(n * W)` time and space.
    pub fn choose(&mut self, candidates: &[Item]) {
        if candidates.is_empty() {
            return;
        }
        // capacity beyond the combined candidate weight is never used
        let total: usize = candidates
            .iter()
            .map(|item| item.weight as usize)
            .fold(0, usize::saturating_add);
        let free = (self.capacity - self.weight).min(total);

        let width = free + 1;
        // best[i * width + w]: best value using the first i items within w
        let mut best = vec![0_u64; (candidates.len() + 1) * width];
        for (i, item) in candidates.iter().enumerate() {
            let item_weight = item.weight as usize;
            let (prev, row) = best.split_at_mut((i + 1) * width);
            let prev = &prev[i * width..];
            for w in 0..width {
                row[w] = prev[w];
                if item_weight <= w {
                    row[w] = row[w].max(prev[w - item_weight] + u64::from(item.value));
                }
            }
        }

        let mut w = free;
        let mut taken = Vec::new();
        for i in (1..=candidates.len()).rev() {
            if best[i * width + w] != best[(i - 1) * width + w] {
                let item = candidates[i - 1];
                w -= item.weight as usize;
                taken.push(item);
            }
        }
        log::debug!(
            "knapsack: took {} of {} items, value {}",
            taken.len(),
            candidates.len(),
            best[candidates.len() * width + free]
        );

        self.weight += free - w;
        self.items.extend(taken);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.value)).sum()
    }

    pub fn total_weight(&self) -> usize {
        self.weight
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.weight = 0;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn brute_force(capacity: usize, items: &[Item]) -> u64 {
        let mut best = 0;
        for mask in 0_u32..(1 << items.len()) {
            let (mut value, mut weight) = (0_u64, 0_usize);
            for (i, item) in items.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    value += u64::from(item.value);
                    weight += item.weight as usize;
                }
            }
            if weight <= capacity {
                best = best.max(value);
            }
        }
        best
    }

    fn assert_consistent(knapsack: &Knapsack) {
        let weight: usize = knapsack.items().iter().map(|i| i.weight as usize).sum();
        assert_eq!(weight, knapsack.total_weight());
        assert!(weight <= knapsack.capacity());
    }

    #[test]
    fn small_examples() {
        let mut items = vec![
            Item::new(5, 3),
            Item::new(6, 10),
            Item::new(1, 1),
            Item::new(2, 5),
        ];
        let mut knapsack = Knapsack::new(7);
        knapsack.choose(&items);
        assert_eq!(knapsack.total_value(), 6);
        assert_consistent(&knapsack);

        items[1].weight = 4;
        knapsack.clear();
        assert!(knapsack.is_empty());
        knapsack.choose(&items);
        assert_eq!(knapsack.total_value(), 11);
        assert_eq!(knapsack.len(), 2);
        assert_consistent(&knapsack);
    }

    #[test]
    fn larger_examples() {
        let mut items = vec![Item::new(10, 10); 4];
        let mut knapsack = Knapsack::new(50);
        knapsack.choose(&items);
        assert_eq!(knapsack.total_value(), 40);
        assert_eq!(knapsack.len(), 4);

        knapsack.clear();
        items[3] = Item::new(10, 30);
        knapsack.choose(&items);
        assert_eq!(knapsack.total_value(), 30);
        assert_consistent(&knapsack);

        knapsack.clear();
        items[3] = Item::new(10, 16);
        items.push(Item::new(30, 5));
        knapsack.choose(&items);
        assert_eq!(knapsack.total_value(), 60);
        assert_consistent(&knapsack);
    }

    #[test]
    fn second_choice_uses_remaining_capacity() {
        let mut knapsack = Knapsack::new(10);
        knapsack.choose(&[Item::new(7, 6)]);
        assert_eq!(knapsack.total_weight(), 6);

        knapsack.choose(&[Item::new(100, 5), Item::new(3, 4), Item::new(2, 2)]);
        assert_eq!(knapsack.total_value(), 10);
        assert_eq!(knapsack.total_weight(), 10);
        assert_consistent(&knapsack);

        knapsack.choose(&[Item::new(1, 0)]);
        assert_eq!(knapsack.len(), 3);
        assert_eq!(knapsack.total_weight(), 10);
    }

    #[test]
    fn zero_weight_items_are_free() {
        let mut knapsack = Knapsack::new(1);
        knapsack.choose(&[Item::new(4, 0), Item::new(1, 2), Item::new(3, 1)]);
        assert_eq!(knapsack.total_value(), 7);
    }

    #[test]
    fn nothing_fits() {
        let mut knapsack = Knapsack::new(3);
        knapsack.choose(&[Item::new(9, 4), Item::new(9, 5)]);
        assert!(knapsack.is_empty());
        assert_eq!(knapsack.total_weight(), 0);

        let mut empty = Knapsack::new(0);
        empty.choose(&[Item::new(1, 5)]);
        assert!(empty.is_empty());
    }

    #[test]
    fn full_knapsack_still_takes_free_items() {
        let mut knapsack = Knapsack::new(0);
        knapsack.choose(&[Item::new(30, 0), Item::new(4, 1), Item::new(0, 0)]);
        assert_eq!(knapsack.total_value(), 30);
        assert_eq!(knapsack.items(), &[Item::new(30, 0)]);
        assert_eq!(knapsack.total_weight(), 0);
    }

    #[test]
    fn huge_capacity() {
        let mut knapsack = Knapsack::new(usize::MAX);
        knapsack.choose(&[Item::new(1, 1), Item::new(7, 1_000)]);
        assert_eq!(knapsack.total_value(), 8);
        assert_eq!(knapsack.total_weight(), 1_001);
        assert_consistent(&knapsack);

        knapsack.choose(&[Item::new(2, 3)]);
        assert_eq!(knapsack.total_value(), 10);
    }

    #[test]
    fn random_against_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x4B4E_0001);
        for _ in 0..300 {
            let n = rng.random_range(0..=10);
            let capacity = rng.random_range(0..=40);
            let items: Vec<Item> = (0..n)
                .map(|_| Item::new(rng.random_range(0..=50), rng.random_range(0..=15)))
                .collect();
            let mut knapsack = Knapsack::new(capacity);
            knapsack.choose(&items);
            assert_eq!(knapsack.total_value(), brute_force(capacity, &items), "items={items:?}");
            assert_consistent(&knapsack);
        }
    }
}
