// src/session.rs

//! File-backed codec sessions.
//!
//! A session reads one input file, builds its code book once, and writes the
//! textual, packed or archived forms of that input. Raw textual and packed
//! files carry no tree, so they can only be turned back into the input by the
//! session that wrote them; the container written by
//! [`HuffmanSession::archive_to`] can be read anywhere.

use crate::archive::HuffArchive;
use crate::codec::{CodecConfig, CompressionStats, HuffmanCodec, PackedBits};
use crate::io::{ByteSink, ByteSource};
use crate::utils::error::{HuffmanError, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Result of [`HuffmanSession::compress_to`].
#[derive(Debug, Clone)]
pub struct PackedReport {
    pub path: PathBuf,
    pub bit_count: u64,
    pub stats: CompressionStats,
}

pub struct HuffmanSession {
    source: Option<PathBuf>,
    input: Vec<u8>,
    codec: HuffmanCodec,
}

impl HuffmanSession {
    /// Reads `input_path` and builds its code book with the default configuration.
    pub fn open(input_path: &str) -> Result<Self> {
        Self::open_with_config(input_path, CodecConfig::default())
    }

    pub fn open_with_config(input_path: &str, config: CodecConfig) -> Result<Self> {
        let path = non_blank(input_path, "input")?;
        info!("reading {}", path.display());
        let input = read_file(&path)?;
        let mut session = Self::from_bytes_with_config(input, config)?;
        session.source = Some(path);
        Ok(session)
    }

    pub fn from_bytes(input: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with_config(input, CodecConfig::default())
    }

    pub fn from_bytes_with_config(input: Vec<u8>, config: CodecConfig) -> Result<Self> {
        info!("initializing code book for {} bytes", input.len());
        let codec = HuffmanCodec::with_config(&input, config)?;
        Ok(Self {
            source: None,
            input,
            codec,
        })
    }

    /// Path the input was read from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn codec(&self) -> &HuffmanCodec {
        &self.codec
    }

    /// Writes the textual encoding of the input to `output_path`.
    pub fn encode_to(&self, output_path: &str) -> Result<PathBuf> {
        let path = non_blank(output_path, "output")?;
        info!("encoding to {}", path.display());
        let encoded = self.codec.encode(&self.input)?;
        write_file(&path, &encoded)?;
        Ok(path)
    }

    /// Writes the packed form of the input to `output_path`.
    ///
    /// The file holds the payload only; keep the returned bit count to read it back.
    pub fn compress_to(&self, output_path: &str) -> Result<PackedReport> {
        let path = non_blank(output_path, "output")?;
        info!("compressing to {}", path.display());
        let packed = self.codec.compress(&self.input)?;
        write_file(&path, &packed.bytes)?;

        let stats = self.codec.stats(self.input.len(), &packed);
        debug!("{}", stats);
        Ok(PackedReport {
            path,
            bit_count: packed.bit_count,
            stats,
        })
    }

    /// Decodes a textual file written by [`encode_to`](Self::encode_to).
    pub fn decode_from(&self, encoded_path: &str) -> Result<Vec<u8>> {
        let path = non_blank(encoded_path, "encoded")?;
        info!("decoding {}", path.display());
        let bits = read_file(&path)?;
        self.codec.decode(&bits)
    }

    /// Unpacks a file written by [`compress_to`](Self::compress_to).
    pub fn extract_from(&self, packed_path: &str, bit_count: u64) -> Result<Vec<u8>> {
        let path = non_blank(packed_path, "packed")?;
        info!("extracting {}", path.display());
        let bytes = read_file(&path)?;
        self.codec.decompress_packed(&PackedBits {
            bytes,
            bit_count,
            width: self.codec.config().pack_width,
        })
    }

    /// Writes a self-describing container holding the packed input.
    pub fn archive_to(&self, output_path: &str) -> Result<PathBuf> {
        let path = non_blank(output_path, "output")?;
        info!("archiving to {}", path.display());
        let archive = HuffArchive::from_codec(&self.codec, &self.input)?;
        let mut writer = BufWriter::new(File::create(&path)?);
        archive.write_to(&mut writer)?;
        Ok(path)
    }
}

/// Reads a container written by [`HuffmanSession::archive_to`] and decodes it.
pub fn extract_archive(archive_path: &str) -> Result<Vec<u8>> {
    let path = non_blank(archive_path, "archive")?;
    info!("extracting archive {}", path.display());
    let mut reader = BufReader::new(File::open(&path)?);
    HuffArchive::read_from(&mut reader)?.decode()
}

/// Decoding a raw textual file outside the session that wrote it.
///
/// The file carries no code table, so this always fails with
/// [`HuffmanError::Unimplemented`]; use an archive instead.
pub fn decode_file(encoded_path: &str) -> Result<Vec<u8>> {
    let path = non_blank(encoded_path, "encoded")?;
    Err(HuffmanError::Unimplemented(format!(
        "{} has no code table; decode it with the session that encoded it",
        path.display()
    )))
}

/// Unpacking a raw packed file outside the session that wrote it.
///
/// Like [`decode_file`], this always fails with [`HuffmanError::Unimplemented`].
pub fn extract_file(packed_path: &str) -> Result<Vec<u8>> {
    let path = non_blank(packed_path, "packed")?;
    Err(HuffmanError::Unimplemented(format!(
        "{} has no tree or bit count; extract it with the session that compressed it",
        path.display()
    )))
}

fn non_blank(path: &str, what: &str) -> Result<PathBuf> {
    if path.trim().is_empty() {
        return Err(HuffmanError::InvalidArgument(format!(
            "the {} file name can't be empty",
            what
        )));
    }
    Ok(PathBuf::from(path))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    File::open(path)?.read_all()
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    BufWriter::new(File::create(path)?).write_all_bytes(data)
}
