// src/tree/frequency.rs

use crate::utils::error::{HuffmanError, Result};

/// Number of distinct symbols: every value of a byte.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count of every byte value in an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Counts every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Builds a table from explicit `(symbol, count)` pairs.
    ///
    /// A symbol listed twice is rejected, as is a zero count.
    pub fn from_counts(pairs: impl IntoIterator<Item = (u8, u64)>) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_SIZE];
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(HuffmanError::InvalidArgument(format!(
                    "symbol 0x{:02x} listed with a zero count",
                    symbol
                )));
            }
            if counts[symbol as usize] != 0 {
                return Err(HuffmanError::InvalidArgument(format!(
                    "symbol 0x{:02x} listed twice",
                    symbol
                )));
            }
            counts[symbol as usize] = count;
        }
        Ok(Self { counts })
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Symbols with a non-zero count, in ascending order.
    pub fn iter_present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX)
            .map(move |symbol| (symbol, self.counts[symbol as usize]))
            .filter(|&(_, count)| count > 0)
    }

    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Total number of counted bytes, or `None` if the counts overflow a `u64`.
    pub fn total(&self) -> Option<u64> {
        self.counts
            .iter()
            .try_fold(0u64, |sum, &count| sum.checked_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}
