// src/codec/stats.rs

use std::fmt;

/// Sizes observed while compressing one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub input_bytes: u64,
    pub bit_count: u64,
    pub output_bytes: u64,
}

impl CompressionStats {
    /// Output size over input size; 0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }

    /// Average code length per input byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.bit_count as f64 / self.input_bytes as f64
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes -> {} bytes ({} bits, {:.1}% of original, {:.3} bits/symbol)",
            self.input_bytes,
            self.output_bytes,
            self.bit_count,
            self.ratio() * 100.0,
            self.bits_per_symbol()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let stats = CompressionStats {
            input_bytes: 6,
            bit_count: 9,
            output_bytes: 2,
        };
        assert!((stats.ratio() - 2.0 / 6.0).abs() < 1e-9);
        assert!((stats.bits_per_symbol() - 1.5).abs() < 1e-9);
        assert!(stats.to_string().starts_with("6 bytes -> 2 bytes (9 bits"));
    }
}
