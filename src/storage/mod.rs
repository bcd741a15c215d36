//! Persistence for cards and settings.
//!
//! Everything on disk is plain JSON under the platform-local application
//! data directory:
//!
//! ```text
//! <data dir>/flashdrill/
//! ├── cards.json      # Array of {prompt, answer} objects, deck order
//! └── settings.json   # Boolean gameplay flags
//! ```

pub mod cards;
pub mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Directory all application files live in.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join("flashdrill"))
        .ok_or(StorageError::DataDirNotFound)
}

/// Writes `contents` so that a reader never observes a partial file:
/// the data goes to a sibling temp file first, then replaces the target
/// in a single rename.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;

    Ok(())
}
