// src/codec/textual.rs

//! Textual mode: one ASCII `'0'` or `'1'` byte per code digit.
//!
//! Eight times larger than the input's packed form, but readable and handy
//! for inspecting a code table.

use crate::codec::walker::TreeWalker;
use crate::tree::{CodeTable, HuffmanTree};
use crate::utils::error::{HuffmanError, Result};

/// Replaces every input byte by its code word spelled in ASCII digits.
pub fn encode(table: &CodeTable, input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(input.len() * 4);
    for &symbol in input {
        let word = table.get(symbol);
        if word.is_empty() {
            return Err(HuffmanError::UnknownSymbol(symbol));
        }
        output.extend(word.bits().map(|bit| if bit { b'1' } else { b'0' }));
    }
    Ok(output)
}

/// Walks `tree` along the ASCII digits of `bits` and collects the symbols.
///
/// Any byte other than `'0'` or `'1'`, and a stream that stops in the middle
/// of a code word, is reported as [`HuffmanError::StreamCorruption`].
pub fn decode(tree: &HuffmanTree, bits: &[u8]) -> Result<Vec<u8>> {
    let mut walker = TreeWalker::new(tree);
    let mut output = Vec::new();

    for (position, &digit) in bits.iter().enumerate() {
        let bit = match digit {
            b'0' => false,
            b'1' => true,
            other => {
                return Err(HuffmanError::StreamCorruption(format!(
                    "byte 0x{:02x} at offset {} is not a binary digit",
                    other, position
                )));
            }
        };
        if let Some(symbol) = walker.step(bit)? {
            output.push(symbol);
        }
    }

    walker.finish()?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::CodeBook;

    #[test]
    fn test_aaabbc() {
        let book = CodeBook::from_bytes(b"AAABBC").unwrap();
        let encoded = encode(book.table(), b"AAABBC").unwrap();
        assert_eq!(encoded, b"000111110".to_vec());
        assert_eq!(encoded.len(), 9);
        assert_eq!(decode(book.tree(), &encoded).unwrap(), b"AAABBC");
    }

    #[test]
    fn test_truncated_stream_is_corruption() {
        let book = CodeBook::from_bytes(b"AAABBC").unwrap();
        let encoded = encode(book.table(), b"AAABBC").unwrap();
        let truncated = &encoded[..encoded.len() - 1];
        assert!(matches!(
            decode(book.tree(), truncated),
            Err(HuffmanError::StreamCorruption(_))
        ));
    }

    #[test]
    fn test_non_digit_is_corruption() {
        let book = CodeBook::from_bytes(b"AB").unwrap();
        assert!(matches!(
            decode(book.tree(), b"01x"),
            Err(HuffmanError::StreamCorruption(_))
        ));
    }

    #[test]
    fn test_unknown_symbol() {
        let book = CodeBook::from_bytes(b"AB").unwrap();
        assert!(matches!(
            encode(book.table(), b"ABC"),
            Err(HuffmanError::UnknownSymbol(b'C'))
        ));
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let book = CodeBook::from_bytes(b"aaaa").unwrap();
        let encoded = encode(book.table(), b"aaaa").unwrap();
        assert_eq!(encoded, b"0000".to_vec());
        assert_eq!(decode(book.tree(), &encoded).unwrap(), b"aaaa");
    }

    #[test]
    fn test_empty_stream_decodes_to_nothing() {
        let book = CodeBook::from_bytes(b"AB").unwrap();
        assert!(decode(book.tree(), b"").unwrap().is_empty());
    }
}
