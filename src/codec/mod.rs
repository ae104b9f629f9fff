//! Encode/decode (textual) and compress/decompress (packed) transforms.

pub mod bit_pack;
#[allow(clippy::module_inception)]
pub mod codec;
pub mod config;
pub mod packed;
pub mod stats;
pub mod textual;
mod walker;

pub use bit_pack::{BitPacker, BitUnpacker, PackWidth};
pub use codec::HuffmanCodec;
pub use config::CodecConfig;
pub use packed::PackedBits;
pub use stats::CompressionStats;
