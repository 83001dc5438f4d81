//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod find;
pub mod list;
pub mod remove;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::storage::Storage;

/// Storage for this invocation. An explicit `--file` wins over the
/// configured path; the configured delimiter applies either way.
pub fn open_storage(file: Option<PathBuf>) -> Result<Storage> {
    let config = Config::load()?;
    match file {
        Some(path) => Ok(Storage::from_path(path, config.delimiter())),
        None => Storage::new(&config),
    }
}

/// Normalize a raw description the way every entry point does before it
/// reaches the store: trimmed and uppercased, so lookups match regardless
/// of input casing.
pub fn normalize_description(raw: &str) -> String {
    raw.trim().to_uppercase()
}
