//! Huffman coding over the byte alphabet.
//!
//! This crate counts the bytes of an input, builds a Huffman tree with an
//! array-backed min-heap, derives a prefix-free code table from it, and uses
//! the pair to transform data in two granularities:
//!
//! - **textual**: one ASCII `'0'`/`'1'` byte per code digit (`encode`/`decode`)
//! - **packed**: real bits, 8 (or, for the legacy layout, 7) per byte
//!   (`compress`/`decompress`)
//!
//! # Quick Start
//!
//! ```
//! use huffman_codec::HuffmanCodec;
//!
//! let input = b"AAABBC";
//! let codec = HuffmanCodec::new(input)?;
//!
//! let text = codec.encode(input)?;
//! assert_eq!(text, b"000111110");
//! assert_eq!(codec.decode(&text)?, input);
//!
//! let packed = codec.compress(input)?;
//! assert_eq!(codec.decompress(&packed.bytes, packed.bit_count)?, input);
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```
//!
//! Raw output does not carry the tree. To decode in another process, wrap
//! the packed form in a [`HuffArchive`]:
//!
//! ```
//! use huffman_codec::{CodecConfig, HuffArchive};
//!
//! let bytes = HuffArchive::compress(b"hello, archive", CodecConfig::default())?.to_bytes()?;
//! assert_eq!(HuffArchive::from_bytes(&bytes)?.decode()?, b"hello, archive");
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```

// Core modules
pub mod codec;
pub mod pq;
pub mod tree;

// Storage and plumbing
pub mod archive;
pub mod io;
pub mod session;
pub mod utils;

// Public API
pub use archive::HuffArchive;
pub use codec::{CodecConfig, CompressionStats, HuffmanCodec, PackWidth, PackedBits};
pub use pq::MinPriorityQueue;
pub use session::{HuffmanSession, PackedReport};
pub use tree::{CodeBook, CodeTable, CodeWord, FrequencyTable, HuffNode, HuffmanTree};

// Error types
pub use utils::error::{HuffmanError, Result};

// Constants
pub const FORMAT_VERSION: u8 = archive::VERSION;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_version() {
        assert_eq!(FORMAT_VERSION, 1);
    }

    #[test]
    fn test_public_api_codec() {
        let codec = HuffmanCodec::new(b"abracadabra").unwrap();
        assert_eq!(codec.book().frequencies().count(b'a'), 5);
        assert_eq!(codec.config().pack_width, PackWidth::Eight);
    }

    #[test]
    fn test_public_api_queue() {
        let mut queue: MinPriorityQueue<HuffNode> = MinPriorityQueue::new();
        queue.insert(HuffNode::leaf(b'x', 4));
        queue.insert(HuffNode::leaf(b'y', 1));
        assert_eq!(queue.extract_min().unwrap().weight(), 1);
    }
}
