//! Project settings for Cecil Attributes weaving.
//!
//! This crate owns the single settings record that controls which woven
//! attributes are kept in player builds and which format templates the
//! generated log and profiler calls use. The record lives in one TOML file
//! under the project's `ProjectSettings` directory and is rewritten on every
//! change.
//!
//! # Example
//!
//! ```no_run
//! use cecil_settings::{SettingsLayout, SettingsStore};
//!
//! let mut store = SettingsStore::open(SettingsLayout::new("/path/to/project"));
//! store.set_parameters_separator("; ")?;
//! assert_eq!(store.parameters_separator(), "; ");
//! # Ok::<(), cecil_settings::Error>(())
//! ```

pub mod error;
pub mod layout;
pub mod logging;
pub mod mode;
pub mod record;
pub mod shared;
pub mod store;

pub use error::{Error, Result};
pub use layout::SettingsLayout;
pub use mode::ResetStaticMode;
pub use record::{CecilSettings, SETTINGS_VERSION};
pub use store::{Origin, SettingsStore};
