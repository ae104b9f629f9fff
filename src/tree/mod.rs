//! Frequency counting, tree construction and code table derivation.

pub mod code_book;
pub mod code_table;
pub mod frequency;
pub mod huffman_tree;
pub mod node;

pub use code_book::CodeBook;
pub use code_table::{CodeTable, CodeWord};
pub use frequency::{FrequencyTable, ALPHABET_SIZE};
pub use huffman_tree::HuffmanTree;
pub use node::HuffNode;
