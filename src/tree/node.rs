// src/tree/node.rs

use std::cmp::Ordering;

/// Node in a Huffman tree.
///
/// Internal nodes own both children and carry no symbol.
#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Joins two subtrees under a new parent; `left` should be the lighter one.
    ///
    /// Returns `None` if the summed weight does not fit in a `u64`.
    pub fn merge(left: HuffNode, right: HuffNode) -> Option<Self> {
        let weight = left.weight().checked_add(right.weight())?;
        Some(HuffNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The child reached by following one code digit, or `None` at a leaf.
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { right.as_ref() } else { left.as_ref() }),
        }
    }
}

// The queue only ever looks at weights.
impl PartialEq for HuffNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight() == other.weight()
    }
}

impl Eq for HuffNode {}

impl PartialOrd for HuffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HuffNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight().cmp(&other.weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_weights() {
        let parent = HuffNode::merge(HuffNode::leaf(b'a', 2), HuffNode::leaf(b'b', 5)).unwrap();
        assert_eq!(parent.weight(), 7);
        assert!(!parent.is_leaf());
        assert!(matches!(parent.child(false), Some(HuffNode::Leaf { symbol: b'a', .. })));
        assert!(matches!(parent.child(true), Some(HuffNode::Leaf { symbol: b'b', .. })));
    }

    #[test]
    fn test_merge_overflow() {
        assert!(HuffNode::merge(HuffNode::leaf(0, u64::MAX), HuffNode::leaf(1, 1)).is_none());
    }

    #[test]
    fn test_ordering_uses_weight_only() {
        assert_eq!(HuffNode::leaf(b'z', 3), HuffNode::leaf(b'a', 3));
        assert!(HuffNode::leaf(b'z', 1) < HuffNode::leaf(b'a', 3));
        assert!(HuffNode::leaf(b'a', 1).child(true).is_none());
    }
}
