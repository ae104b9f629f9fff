// src/archive/archive.rs

//! Self-describing container for packed output.
//!
//! Raw packed bytes cannot be decoded without the tree that produced them.
//! The container stores the frequency table instead of the tree: tree
//! construction is deterministic, so the reader rebuilds the same tree.
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! magic      4 bytes  "HUFF"
//! version    u8       1
//! width      u8       7 or 8 digits per payload byte
//! orig_len   u64      input length in bytes
//! bit_count  u64      meaningful payload bits
//! symbols    u16      number of present symbols (1..=256)
//! entries    symbols x (symbol u8, count u64), ascending symbol
//! payload    ceil(bit_count / width) bytes
//! ```

use crate::codec::{CodecConfig, HuffmanCodec, PackWidth, PackedBits};
use crate::io::{ByteSink, ByteSource};
use crate::tree::{CodeBook, FrequencyTable, ALPHABET_SIZE};
use crate::utils::error::{HuffmanError, Result};
use log::debug;
use std::io::{Cursor, Read, Write};

pub const MAGIC: &[u8; 4] = b"HUFF";
pub const VERSION: u8 = 1;

/// A packed payload bundled with everything needed to decode it.
#[derive(Debug, Clone)]
pub struct HuffArchive {
    frequencies: FrequencyTable,
    original_length: u64,
    packed: PackedBits,
}

impl HuffArchive {
    /// Compresses `input` with `codec` and wraps the result.
    ///
    /// `input` must be the data the codec's code book was built from, since
    /// the stored frequencies have to describe the payload's tree.
    pub fn from_codec(codec: &HuffmanCodec, input: &[u8]) -> Result<Self> {
        if codec.book().frequencies() != &FrequencyTable::from_bytes(input) {
            return Err(HuffmanError::InvalidArgument(
                "input does not match the codec's code book".to_string(),
            ));
        }
        let packed = codec.compress(input)?;
        Ok(Self {
            frequencies: codec.book().frequencies().clone(),
            original_length: input.len() as u64,
            packed,
        })
    }

    /// Builds a codec for `input` with `config` and wraps its packed output.
    pub fn compress(input: &[u8], config: CodecConfig) -> Result<Self> {
        let codec = HuffmanCodec::with_config(input, config)?;
        Self::from_codec(&codec, input)
    }

    pub fn original_length(&self) -> u64 {
        self.original_length
    }

    pub fn packed(&self) -> &PackedBits {
        &self.packed
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(MAGIC)?;
        writer.write_u8_be(VERSION)?;
        writer.write_u8_be(self.packed.width.bits())?;
        writer.write_u64_be(self.original_length)?;
        writer.write_u64_be(self.packed.bit_count)?;

        let symbols = self.frequencies.distinct_symbols() as u16;
        writer.write_u16_be(symbols)?;
        for (symbol, count) in self.frequencies.iter_present() {
            writer.write_u8_be(symbol)?;
            writer.write_u64_be(count)?;
        }

        writer.write_all_bytes(&self.packed.bytes)?;
        debug!(
            "wrote archive: {} symbols, {} payload bytes",
            symbols,
            self.packed.bytes.len()
        );
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.packed.bytes.len() + 24 + 9 * 256);
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Reads a container; the payload runs to the end of `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let magic = reader.read_exact_vec(MAGIC.len())?;
        if magic != MAGIC {
            return Err(HuffmanError::Format(format!("bad magic {:02x?}", magic)));
        }

        let version = reader.read_u8_be()?;
        if version != VERSION {
            return Err(HuffmanError::Format(format!("unsupported version {}", version)));
        }

        let width_bits = reader.read_u8_be()?;
        let width = PackWidth::from_bits(width_bits).ok_or_else(|| {
            HuffmanError::Format(format!("unsupported pack width {}", width_bits))
        })?;

        let original_length = reader.read_u64_be()?;
        let bit_count = reader.read_u64_be()?;

        let symbols = reader.read_u16_be()? as usize;
        if symbols == 0 || symbols > ALPHABET_SIZE {
            return Err(HuffmanError::Format(format!("symbol count {} out of range", symbols)));
        }
        let mut entries = Vec::with_capacity(symbols);
        for _ in 0..symbols {
            let symbol = reader.read_u8_be()?;
            let count = reader.read_u64_be()?;
            entries.push((symbol, count));
        }
        let frequencies = FrequencyTable::from_counts(entries)
            .map_err(|err| HuffmanError::Format(err.to_string()))?;
        let total = frequencies
            .total()
            .ok_or_else(|| HuffmanError::Format("symbol counts overflow".to_string()))?;
        if total != original_length {
            return Err(HuffmanError::Format(format!(
                "frequencies sum to {} but the header says {} bytes",
                total, original_length
            )));
        }

        let bytes = reader.read_all()?;
        let expected = width.bytes_for(bit_count);
        if bytes.len() as u64 != expected {
            return Err(HuffmanError::Format(format!(
                "payload is {} bytes, expected {} for {} bits",
                bytes.len(),
                expected,
                bit_count
            )));
        }

        Ok(Self {
            frequencies,
            original_length,
            packed: PackedBits {
                bytes,
                bit_count,
                width,
            },
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read_from(&mut Cursor::new(data))
    }

    /// Rebuilds the tree from the stored frequencies and decodes the payload.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let book = CodeBook::from_frequencies(self.frequencies.clone())?;
        let config = CodecConfig::default().with_pack_width(self.packed.width);
        let codec = HuffmanCodec::from_code_book(book, config);

        let output = codec.decompress_packed(&self.packed)?;
        if output.len() as u64 != self.original_length {
            return Err(HuffmanError::StreamCorruption(format!(
                "decoded {} bytes, header says {}",
                output.len(),
                self.original_length
            )));
        }
        Ok(output)
    }
}
