// src/tree/huffman_tree.rs

//! Greedy Huffman tree construction.
//!
//! Leaves go into a [`MinPriorityQueue`] in ascending symbol order, then the
//! two lightest subtrees are merged until one root remains. Because both the
//! insertion order and the heap operations are fixed, the same frequency
//! table always produces the same tree shape. That is what lets a container
//! store only the frequencies and rebuild the exact tree on the other side.

use crate::pq::MinPriorityQueue;
use crate::tree::frequency::FrequencyTable;
use crate::tree::node::HuffNode;
use crate::utils::error::{HuffmanError, Result};
use log::{debug, log_enabled, trace, Level};

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    /// Builds the tree for the symbols of `frequencies`.
    ///
    /// Fails with [`HuffmanError::EmptyInput`] when no symbol has a count.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut queue = MinPriorityQueue::with_capacity(frequencies.distinct_symbols());
        for (symbol, count) in frequencies.iter_present() {
            queue.insert(HuffNode::leaf(symbol, count));
        }

        let leaves = queue.len();
        while queue.len() > 1 {
            let a = queue.extract_min()?;
            let b = queue.extract_min()?;
            let parent = HuffNode::merge(a, b).ok_or_else(|| {
                HuffmanError::InvalidArgument("symbol counts overflow a 64-bit weight".to_string())
            })?;
            queue.insert(parent);
        }
        let root = queue.extract_min()?;

        let tree = HuffmanTree { root };
        debug!(
            "built Huffman tree: {} leaves, depth {}, weight {}",
            leaves,
            tree.depth(),
            tree.weight()
        );
        if log_enabled!(Level::Trace) {
            tree.log_structure();
        }
        Ok(tree)
    }

    /// Counts `data` and builds the tree for it.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Sum of all leaf weights, i.e. the length of the counted input.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Pre-order walk yielding every node with its depth.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = (&HuffNode, usize)> {
        let mut stack = vec![(&self.root, 0usize)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let HuffNode::Internal { left, right, .. } = node {
                stack.push((right.as_ref(), depth + 1));
                stack.push((left.as_ref(), depth + 1));
            }
            Some((node, depth))
        })
    }

    /// Dumps the tree shape at trace level.
    pub fn log_structure(&self) {
        trace!("Huffman tree structure:");
        for (node, depth) in self.nodes() {
            let indent = "  ".repeat(depth);
            match node {
                HuffNode::Leaf { symbol, weight } => {
                    trace!("{}Leaf 0x{:02x} {:?} [weight: {}]", indent, symbol, *symbol as char, weight)
                }
                HuffNode::Internal { weight, .. } => trace!("{}Internal [weight: {}]", indent, weight),
            }
        }
    }
}
