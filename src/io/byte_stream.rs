// src/io/byte_stream.rs

//! Byte stream seams between the codec and whatever stores its input and output.
//!
//! The codec only ever sees fully materialized byte slices. Anything that
//! implements `Read` is a [`ByteSource`] and anything that implements `Write`
//! is a [`ByteSink`]; the big-endian helpers are used by the container format.

use crate::utils::error::Result;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// A trait for pulling input out of a reader.
pub trait ByteSource: Read {
    /// Reads until end of stream.
    fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.read_to_end(&mut data)?;
        Ok(data)
    }

    fn read_u8_be(&mut self) -> Result<u8> {
        Ok(ReadBytesExt::read_u8(self)?)
    }

    fn read_u16_be(&mut self) -> Result<u16> {
        Ok(ReadBytesExt::read_u16::<BigEndian>(self)?)
    }

    fn read_u64_be(&mut self) -> Result<u64> {
        Ok(ReadBytesExt::read_u64::<BigEndian>(self)?)
    }

    fn read_exact_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        self.read_exact(&mut buffer)?;
        Ok(buffer)
    }
}

/// A trait for pushing output into a writer.
pub trait ByteSink: Write {
    /// Writes all of `data` and flushes.
    fn write_all_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.write_all(data)?;
        self.flush()?;
        Ok(())
    }

    fn write_u8_be(&mut self, value: u8) -> Result<()> {
        Ok(WriteBytesExt::write_u8(self, value)?)
    }

    fn write_u16_be(&mut self, value: u16) -> Result<()> {
        Ok(WriteBytesExt::write_u16::<BigEndian>(self, value)?)
    }

    fn write_u64_be(&mut self, value: u64) -> Result<()> {
        Ok(WriteBytesExt::write_u64::<BigEndian>(self, value)?)
    }
}

/// Implement ByteSource for any type that implements Read
impl<T: Read + ?Sized> ByteSource for T {}

/// Implement ByteSink for any type that implements Write
impl<T: Write + ?Sized> ByteSink for T {}
