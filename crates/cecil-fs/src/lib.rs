//! Filesystem abstraction for Cecil Attributes settings
//!
//! Provides normalized path handling, crash-safe atomic writes and
//! format-agnostic configuration (de)serialization.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
