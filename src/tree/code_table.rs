// src/tree/code_table.rs

use crate::tree::frequency::{FrequencyTable, ALPHABET_SIZE};
use crate::tree::huffman_tree::HuffmanTree;
use crate::tree::node::HuffNode;
use bitvec::order::Msb0;
use bitvec::vec::BitVec;
use std::fmt;

/// A code word: the digits on the path from the root to a leaf, first digit first.
///
/// `false` is a left edge (`0`), `true` a right edge (`1`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeWord(BitVec<u8, Msb0>);

impl CodeWord {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty word marks an unused symbol.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }

    /// Whether `self` is a proper or equal prefix of `other`.
    pub fn is_prefix_of(&self, other: &CodeWord) -> bool {
        self.len() <= other.len() && other.0[..self.len()] == self.0[..]
    }
}

impl fmt::Display for CodeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for CodeWord {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        CodeWord(iter.into_iter().collect())
    }
}

/// Code word for every byte value, indexed by symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    words: Vec<CodeWord>,
}

impl CodeTable {
    /// Derives the codes by walking the tree depth first.
    ///
    /// A tree that is a lone leaf gives its symbol the one-digit code `0`,
    /// since an empty code could not be told apart while decoding.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut words = vec![CodeWord::default(); ALPHABET_SIZE];

        if let HuffNode::Leaf { symbol, .. } = tree.root() {
            words[*symbol as usize] = CodeWord(BitVec::repeat(false, 1));
            return Self { words };
        }

        let mut stack: Vec<(&HuffNode, BitVec<u8, Msb0>)> = vec![(tree.root(), BitVec::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => words[*symbol as usize] = CodeWord(path),
                HuffNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right.as_ref(), right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        Self { words }
    }

    pub fn get(&self, symbol: u8) -> &CodeWord {
        &self.words[symbol as usize]
    }

    /// Symbols that have a code word, with that word, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &CodeWord)> {
        (0..=u8::MAX)
            .zip(self.words.iter())
            .filter(|(_, word)| !word.is_empty())
    }

    /// Total encoded length in bits of an input with these frequencies.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter_present()
            .map(|(symbol, count)| count * self.get(symbol).len() as u64)
            .sum()
    }
}
