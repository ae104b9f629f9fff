//! Container format that stores the frequency table next to the payload.

#[allow(clippy::module_inception)]
pub mod archive;

pub use archive::{HuffArchive, MAGIC, VERSION};
