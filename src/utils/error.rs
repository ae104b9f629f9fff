// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the Huffman codec library.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// An error occurred while reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid argument was provided to a function, such as a blank path.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A code book cannot be built from an input with no symbols.
    #[error("Cannot build a Huffman code from an empty input")]
    EmptyInput,

    /// `peek_min`, `extract_min` or `duplicate` on a queue with no elements.
    #[error("Priority queue underflow")]
    EmptyQueue,

    /// A decode walk hit an invalid digit, ran out of bits, or stopped mid-path.
    #[error("Corrupt stream: {0}")]
    StreamCorruption(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The operation needs information the raw stream does not carry.
    #[error("Not implemented: {0}")]
    Unimplemented(String),

    /// The input contains a byte the code table has no code word for.
    #[error("Symbol 0x{0:02x} has no code word in this code book")]
    UnknownSymbol(u8),

    /// A container header failed validation.
    #[error("Invalid container: {0}")]
    Format(String),
}

/// A specialized `Result` type for Huffman codec operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
