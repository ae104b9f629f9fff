// src/codec/walker.rs

//! The decode state machine shared by the textual and packed decoders.
//!
//! The walker starts at the root, moves left on a `0` and right on a `1`, and
//! reports the symbol whenever it lands on a leaf before jumping back to the
//! root. A stream is only well formed if it ends with the walker at the root.

use crate::tree::{HuffNode, HuffmanTree};
use crate::utils::error::{HuffmanError, Result};

pub(crate) struct TreeWalker<'a> {
    root: &'a HuffNode,
    current: &'a HuffNode,
    consumed: u64,
}

impl<'a> TreeWalker<'a> {
    pub(crate) fn new(tree: &'a HuffmanTree) -> Self {
        Self {
            root: tree.root(),
            current: tree.root(),
            consumed: 0,
        }
    }

    /// Follows one code digit. Returns the symbol if a leaf was reached.
    pub(crate) fn step(&mut self, bit: bool) -> Result<Option<u8>> {
        self.consumed += 1;

        // A lone-leaf tree spends exactly one `0` per symbol.
        if let HuffNode::Leaf { symbol, .. } = self.root {
            return if bit {
                Err(HuffmanError::StreamCorruption(format!(
                    "digit 1 at bit {} but the only code word is 0",
                    self.consumed - 1
                )))
            } else {
                Ok(Some(*symbol))
            };
        }

        let next = self.current.child(bit).ok_or_else(|| {
            HuffmanError::StreamCorruption(format!("walked past a leaf at bit {}", self.consumed - 1))
        })?;

        match next {
            HuffNode::Leaf { symbol, .. } => {
                self.current = self.root;
                Ok(Some(*symbol))
            }
            HuffNode::Internal { .. } => {
                self.current = next;
                Ok(None)
            }
        }
    }

    /// Checks that the stream stopped on a code word boundary.
    pub(crate) fn finish(self) -> Result<()> {
        if std::ptr::eq(self.current, self.root) {
            Ok(())
        } else {
            Err(HuffmanError::StreamCorruption(format!(
                "stream ended in the middle of a code word after {} bits",
                self.consumed
            )))
        }
    }
}
