// src/codec/config.rs

use crate::codec::bit_pack::PackWidth;

/// Options for a [`HuffmanCodec`](crate::codec::HuffmanCodec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Digits per packed byte (default: 8)
    pub pack_width: PackWidth,
    /// Decode every encode/compress result again and fail on mismatch (default: false)
    pub verify_roundtrip: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pack_width: PackWidth::Eight,
            verify_roundtrip: false,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven-digits-per-byte layout of the legacy packed format.
    pub fn legacy() -> Self {
        Self::default().with_pack_width(PackWidth::Seven)
    }

    pub fn with_pack_width(mut self, pack_width: PackWidth) -> Self {
        self.pack_width = pack_width;
        self
    }

    pub fn with_verification(mut self, verify_roundtrip: bool) -> Self {
        self.verify_roundtrip = verify_roundtrip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = CodecConfig::new().with_verification(true);
        assert_eq!(config.pack_width, PackWidth::Eight);
        assert!(config.verify_roundtrip);
        assert_eq!(CodecConfig::legacy().pack_width, PackWidth::Seven);
    }
}
