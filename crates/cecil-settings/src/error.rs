//! Error types for cecil-settings

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] cecil_fs::Error),

    #[error("Settings at {path} use format version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    #[error("Invalid reset static mode: {mode}")]
    InvalidMode { mode: String },
}
