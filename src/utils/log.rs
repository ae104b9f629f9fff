// src/utils/log.rs

//! Logging for the Huffman codec library.
//!
//! The library only emits records through the `log` facade. Status messages
//! for each codec step go out at `info`, table and stream statistics at
//! `debug`, and tree dumps at `trace`.
//!
//! Applications that do not bring their own logger can install `env_logger`
//! through the helpers below:
//!
//! ```
//! huffman_codec::utils::log::init_logger(log::LevelFilter::Debug).ok();
//! ```

pub use log::{debug, error, info, trace, warn, Level, LevelFilter};

use env_logger::{Builder, Env};
use log::SetLoggerError;

fn builder(max_level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(max_level).format_target(false);
    builder
}

/// Installs a global `env_logger` logger writing to standard error.
///
/// This should be called once at the beginning of the program's execution.
/// A second call leaves the first logger in place and returns the error
/// from `log::set_logger`.
///
/// # Arguments
/// * `max_level` - The maximum level of messages to log (e.g., `LevelFilter::Info`).
pub fn init_logger(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    builder(max_level).try_init()
}

/// Like [`init_logger`], but `RUST_LOG` takes precedence over `default_filter`.
pub fn init_from_env(default_filter: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter)).try_init()
}
