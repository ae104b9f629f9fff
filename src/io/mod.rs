//! Input/output plumbing around the in-memory codec.

pub mod byte_stream;

pub use byte_stream::{ByteSink, ByteSource};
