// src/tree/code_book.rs

use crate::tree::code_table::CodeTable;
use crate::tree::frequency::FrequencyTable;
use crate::tree::huffman_tree::HuffmanTree;
use crate::utils::error::Result;

/// Everything derived from one input's frequencies: the tree, its code table,
/// and the frequencies themselves.
///
/// A code book is immutable once built and is passed by reference into every
/// transform, so any number of them can be in use at the same time.
#[derive(Debug, Clone)]
pub struct CodeBook {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
}

impl CodeBook {
    pub fn from_frequencies(frequencies: FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        Ok(Self {
            frequencies,
            tree,
            table,
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::from_bytes(data))
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Number of code digits the counted input encodes to.
    pub fn encoded_bits(&self) -> u64 {
        self.table.weighted_length(&self.frequencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_code_book_is_shareable() {
        assert_send_sync::<CodeBook>();
    }

    #[test]
    fn test_encoded_bits() {
        let book = CodeBook::from_bytes(b"AAABBC").unwrap();
        assert_eq!(book.encoded_bits(), 9);
        assert_eq!(book.tree().weight(), 6);
    }
}
