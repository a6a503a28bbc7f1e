use std::collections::BTreeMap;

use crate::tree::frequencies;
use crate::{HuffmanError, HuffmanTree};

/// Encoder trained on a sample: holds the sample's histogram, tree, code
/// table and the sample itself encoded.
#[derive(Clone, Debug)]
pub struct HuffmanEncoder {
    frequencies: [u64; 256],
    tree: Option<HuffmanTree>,
    codes: BTreeMap<u8, Vec<bool>>,
    encoded: Vec<bool>,
}

impl HuffmanEncoder {
    pub fn new(sample: &[u8]) -> Self {
        let frequencies = frequencies(sample);
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let codes = tree.as_ref().map(HuffmanTree::codes).unwrap_or_default();
        // the tree was built from this sample, so every byte has a code
        let encoded = sample
            .iter()
            .flat_map(|byte| &codes[byte])
            .copied()
            .collect();
        Self {
            frequencies,
            tree,
            codes,
            encoded,
        }
    }

    pub fn frequencies(&self) -> &[u64; 256] {
        &self.frequencies
    }

    /// `None` when the sample was empty.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn codes(&self) -> &BTreeMap<u8, Vec<bool>> {
        &self.codes
    }

    pub fn encoded(&self) -> &[bool] {
        &self.encoded
    }

    pub fn encode(&self, message: &[u8]) -> Result<Vec<bool>, HuffmanError> {
        let mut bits = Vec::new();
        for &byte in message {
            let code = self
                .codes
                .get(&byte)
                .ok_or(HuffmanError::UnknownSymbol(byte))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}

pub fn decode(tree: &HuffmanTree, bits: &[bool]) -> Result<Vec<u8>, HuffmanError> {
    tree.decode(bits)
}
