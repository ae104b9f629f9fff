// src/codec/codec.rs

use crate::codec::{packed, textual};
use crate::codec::{CodecConfig, CompressionStats, PackedBits};
use crate::tree::CodeBook;
use crate::utils::error::{HuffmanError, Result};
use log::debug;

/// Runs the four transforms against one code book.
///
/// The code book is built from an input and every transform works only on
/// data produced with that same code book. Raw output carries no tree; use
/// [`HuffArchive`](crate::archive::HuffArchive) to make packed output
/// readable without the codec.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    book: CodeBook,
    config: CodecConfig,
}

impl HuffmanCodec {
    /// Builds a codec for `input` with the default configuration.
    pub fn new(input: &[u8]) -> Result<Self> {
        Self::with_config(input, CodecConfig::default())
    }

    pub fn with_config(input: &[u8], config: CodecConfig) -> Result<Self> {
        let book = CodeBook::from_bytes(input)?;
        debug!(
            "code book for {} bytes: {} symbols, {} encoded bits",
            input.len(),
            book.frequencies().distinct_symbols(),
            book.encoded_bits()
        );
        Ok(Self::from_code_book(book, config))
    }

    pub fn from_code_book(book: CodeBook, config: CodecConfig) -> Self {
        Self { book, config }
    }

    pub fn book(&self) -> &CodeBook {
        &self.book
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Textual encoding: one ASCII `'0'`/`'1'` per code digit.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let encoded = textual::encode(self.book.table(), input)?;
        if self.config.verify_roundtrip {
            let decoded = self.decode(&encoded)?;
            check_roundtrip(input, &decoded)?;
        }
        Ok(encoded)
    }

    pub fn decode(&self, bits: &[u8]) -> Result<Vec<u8>> {
        textual::decode(self.book.tree(), bits)
    }

    /// Packs the code digits of `input` using the configured width.
    pub fn compress(&self, input: &[u8]) -> Result<PackedBits> {
        let packed = packed::compress(self.book.table(), input, self.config.pack_width)?;
        debug!("{}", self.stats(input.len(), &packed));
        if self.config.verify_roundtrip {
            let decompressed = self.decompress(&packed.bytes, packed.bit_count)?;
            check_roundtrip(input, &decompressed)?;
        }
        Ok(packed)
    }

    /// Unpacks the first `bit_count` bits of `bytes` using the configured width.
    pub fn decompress(&self, bytes: &[u8], bit_count: u64) -> Result<Vec<u8>> {
        packed::decompress(self.book.tree(), bytes, bit_count, self.config.pack_width)
    }

    /// Unpacks a [`PackedBits`] value with the width it was packed with.
    pub fn decompress_packed(&self, packed: &PackedBits) -> Result<Vec<u8>> {
        packed::decompress(self.book.tree(), &packed.bytes, packed.bit_count, packed.width)
    }

    pub fn stats(&self, input_len: usize, packed: &PackedBits) -> CompressionStats {
        CompressionStats {
            input_bytes: input_len as u64,
            bit_count: packed.bit_count,
            output_bytes: packed.bytes.len() as u64,
        }
    }
}

fn check_roundtrip(original: &[u8], restored: &[u8]) -> Result<()> {
    if original == restored {
        return Ok(());
    }
    let first_difference = original
        .iter()
        .zip(restored)
        .position(|(a, b)| a != b)
        .unwrap_or(original.len().min(restored.len()));
    Err(HuffmanError::StreamCorruption(format!(
        "round trip mismatch at byte {} ({} bytes in, {} bytes out)",
        first_difference,
        original.len(),
        restored.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PackWidth;

    #[test]
    fn test_empty_input() {
        assert!(matches!(HuffmanCodec::new(b""), Err(HuffmanError::EmptyInput)));
    }

    #[test]
    fn test_verified_roundtrips() {
        let text = b"she sells sea shells by the sea shore";
        for width in [PackWidth::Seven, PackWidth::Eight] {
            let config = CodecConfig::new()
                .with_pack_width(width)
                .with_verification(true);
            let codec = HuffmanCodec::with_config(text, config).unwrap();

            let encoded = codec.encode(text).unwrap();
            assert_eq!(encoded.len() as u64, codec.book().encoded_bits());

            let packed = codec.compress(text).unwrap();
            assert_eq!(packed.width, width);
            assert_eq!(packed.bit_count, codec.book().encoded_bits());
            assert_eq!(codec.decompress_packed(&packed).unwrap(), text);
        }
    }

    #[test]
    fn test_codec_shared_across_threads() {
        let text = b"mississippi river";
        let codec = HuffmanCodec::new(text).unwrap();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let packed = codec.compress(text).unwrap();
                    assert_eq!(codec.decompress(&packed.bytes, packed.bit_count).unwrap(), text);
                });
            }
        });
    }

    #[test]
    fn test_check_roundtrip_reports_offset() {
        let err = check_roundtrip(b"abcd", b"abXd").unwrap_err();
        assert!(err.to_string().contains("at byte 2"));
        let err = check_roundtrip(b"abcd", b"ab").unwrap_err();
        assert!(err.to_string().contains("at byte 2"));
    }
}
