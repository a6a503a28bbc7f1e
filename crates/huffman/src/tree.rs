use std::collections::BTreeMap;

use indexed_heap::IndexedHeap;

use crate::HuffmanError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: usize,
        right: usize,
    },
}

impl Node {
    pub fn frequency(&self) -> u64 {
        match *self {
            Self::Leaf { frequency, .. } | Self::Internal { frequency, .. } => frequency,
        }
    }
}

/// Huffman tree stored as an arena; children are indices into `nodes`.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Greedy bottom-up build: repeatedly merges the two least frequent
    /// nodes. Symbols with frequency `0` get no leaf. `None` if every
    /// frequency is `0`.
    pub fn from_frequencies(frequencies: &[u64; 256]) -> Option<Self> {
        let mut nodes = Vec::new();
        // (frequency, arena index) is unique, ties go to the older node
        let mut heap: IndexedHeap<(u64, usize)> = IndexedHeap::new();

        for (symbol, &frequency) in (0..=u8::MAX).zip(frequencies.iter()) {
            if frequency > 0 {
                heap.push((frequency, nodes.len()));
                nodes.push(Node::Leaf { symbol, frequency });
            }
        }

        while heap.len() > 1 {
            let (Ok((lf, left)), Ok((rf, right))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let frequency = lf.saturating_add(rf);
            heap.push((frequency, nodes.len()));
            nodes.push(Node::Internal {
                frequency,
                left,
                right,
            });
        }

        let (_, root) = heap.pop().ok()?;
        Some(Self { nodes, root })
    }

    pub fn from_sample(sample: &[u8]) -> Option<Self> {
        Self::from_frequencies(&frequencies(sample))
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }

    /// Code of every symbol in the tree: a left turn is `false`, a right
    /// turn `true`. A tree with a single symbol codes it as `[false]`.
    pub fn codes(&self) -> BTreeMap<u8, Vec<bool>> {
        let mut codes = BTreeMap::new();
        if let Node::Leaf { symbol, .. } = *self.root() {
            codes.insert(symbol, vec![false]);
            return codes;
        }

        let mut stack = vec![(self.root, Vec::new())];
        while let Some((index, prefix)) = stack.pop() {
            match self.nodes[index] {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol, prefix);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push(true);
                    stack.push((right, right_prefix));
                    let mut left_prefix = prefix;
                    left_prefix.push(false);
                    stack.push((left, left_prefix));
                }
            }
        }
        codes
    }

    /// Walks the tree once per symbol. Fails if the bits stop between a
    /// root and a leaf.
    pub fn decode(&self, bits: &[bool]) -> Result<Vec<u8>, HuffmanError> {
        if let Node::Leaf { symbol, .. } = *self.root() {
            return Ok(vec![symbol; bits.len()]);
        }

        let mut decoded = Vec::new();
        let mut current = self.root;
        for &bit in bits {
            if let Node::Internal { left, right, .. } = self.nodes[current] {
                current = if bit { right } else { left };
            }
            if let Node::Leaf { symbol, .. } = self.nodes[current] {
                decoded.push(symbol);
                current = self.root;
            }
        }

        if current != self.root {
            return Err(HuffmanError::TruncatedCode);
        }
        Ok(decoded)
    }
}

/// Byte histogram of `sample`.
pub fn frequencies(sample: &[u8]) -> [u64; 256] {
    let mut frequencies = [0; 256];
    for &byte in sample {
        frequencies[byte as usize] += 1;
    }
    frequencies
}
