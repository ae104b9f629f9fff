// src/codec/packed.rs

//! Packed mode: code digits stored as real bits.
//!
//! The payload carries no header. The number of meaningful bits travels next
//! to it in [`PackedBits`] because the last byte is zero-padded.

use crate::codec::bit_pack::{BitPacker, BitUnpacker, PackWidth};
use crate::codec::walker::TreeWalker;
use crate::tree::{CodeTable, HuffmanTree};
use crate::utils::error::{HuffmanError, Result};

/// Packed payload plus what is needed to read it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    /// Meaningful bits in `bytes`; the rest is padding.
    pub bit_count: u64,
    pub width: PackWidth,
}

/// Packs the code words of `input` into bytes of `width` digits each.
pub fn compress(table: &CodeTable, input: &[u8], width: PackWidth) -> Result<PackedBits> {
    let mut packer = BitPacker::new(Vec::with_capacity(input.len() / 2 + 1), width);
    for &symbol in input {
        let word = table.get(symbol);
        if word.is_empty() {
            return Err(HuffmanError::UnknownSymbol(symbol));
        }
        packer.write_bits(word.bits())?;
    }
    let (bytes, bit_count) = packer.finish()?;
    Ok(PackedBits {
        bytes,
        bit_count,
        width,
    })
}

/// Walks `tree` along the first `bit_count` bits of `bytes`.
///
/// Padding after the last meaningful bit is never read, even inside a byte.
pub fn decompress(
    tree: &HuffmanTree,
    bytes: &[u8],
    bit_count: u64,
    width: PackWidth,
) -> Result<Vec<u8>> {
    let mut walker = TreeWalker::new(tree);
    let mut output = Vec::new();

    for bit in BitUnpacker::new(bytes, bit_count, width)? {
        if let Some(symbol) = walker.step(bit)? {
            output.push(symbol);
        }
    }

    walker.finish()?;
    Ok(output)
}
