// src/codec/bit_pack.rs

//! Bit-level packing of code digits into bytes.
//!
//! Digits fill a byte from its most significant used bit downwards. With
//! [`PackWidth::Eight`] every bit of a byte carries data. With
//! [`PackWidth::Seven`] only the low seven bits do and bit 7 is always zero,
//! which reproduces the legacy packed format byte for byte.

use crate::utils::error::{HuffmanError, Result};
use std::io::{self, Write};

/// How many code digits go into one packed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackWidth {
    /// Legacy layout: seven digits per byte, high bit unused.
    Seven,
    #[default]
    Eight,
}

impl PackWidth {
    pub fn bits(self) -> u8 {
        match self {
            PackWidth::Seven => 7,
            PackWidth::Eight => 8,
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            7 => Some(PackWidth::Seven),
            8 => Some(PackWidth::Eight),
            _ => None,
        }
    }

    /// Number of bytes needed to hold `bit_count` digits.
    pub fn bytes_for(self, bit_count: u64) -> u64 {
        bit_count.div_ceil(self.bits() as u64)
    }
}

/// A bit-level writer grouping digits into bytes of the given width.
pub struct BitPacker<W: Write> {
    writer: W,
    width: PackWidth,
    buffer: u8,
    filled: u8,
    bit_count: u64,
}

impl<W: Write> BitPacker<W> {
    pub fn new(writer: W, width: PackWidth) -> Self {
        Self {
            writer,
            width,
            buffer: 0,
            filled: 0,
            bit_count: 0,
        }
    }

    /// Writes a single digit.
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.filled += 1;
        self.bit_count += 1;

        if self.filled == self.width.bits() {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.filled = 0;
        }
        Ok(())
    }

    pub fn write_bits(&mut self, bits: impl IntoIterator<Item = bool>) -> io::Result<()> {
        for bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Meaningful digits written so far; padding is not counted.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Zero-fills the last partial group, flushes, and returns the writer
    /// together with the meaningful digit count.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        if self.filled > 0 {
            let pad = self.width.bits() - self.filled;
            self.writer.write_all(&[self.buffer << pad])?;
        }
        self.writer.flush()?;
        Ok((self.writer, self.bit_count))
    }
}

/// Reads back exactly `bit_count` digits from packed bytes, skipping padding.
pub struct BitUnpacker<'a> {
    bytes: &'a [u8],
    width: PackWidth,
    position: u64,
    bit_count: u64,
}

impl<'a> BitUnpacker<'a> {
    /// Fails with [`HuffmanError::StreamCorruption`] if `bytes` cannot hold
    /// `bit_count` digits.
    pub fn new(bytes: &'a [u8], bit_count: u64, width: PackWidth) -> Result<Self> {
        let available = bytes.len() as u64 * width.bits() as u64;
        if bit_count > available {
            return Err(HuffmanError::StreamCorruption(format!(
                "{} bits declared but only {} bytes ({} bits) present",
                bit_count,
                bytes.len(),
                available
            )));
        }
        Ok(Self {
            bytes,
            width,
            position: 0,
            bit_count,
        })
    }
}

impl Iterator for BitUnpacker<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.position >= self.bit_count {
            return None;
        }
        let width = self.width.bits() as u64;
        let byte = self.bytes[(self.position / width) as usize];
        let shift = width - 1 - self.position % width;
        self.position += 1;
        Some((byte >> shift) & 1 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.bit_count - self.position) as usize;
        (remaining, Some(remaining))
    }
}
