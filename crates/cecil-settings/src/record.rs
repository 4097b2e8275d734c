//! The settings record and its on-disk format.
//!
//! The record is a flat TOML document:
//!
//! ```toml
//! version = 1
//! include_reset_static_in_build = true
//! reset_static_mode = "subsystem-registration"
//! include_logs_in_build = true
//! method_log_format = "%class% %method% (%parameters%)"
//! parameters_separator = ", "
//! # ...
//! ```
//!
//! Keys missing from a file take their default value. Template strings are
//! stored verbatim; placeholder tokens such as `%class%` are expanded by the
//! weaver, never here.

use serde::{Deserialize, Serialize};

use crate::mode::ResetStaticMode;
use crate::{Error, Result};
use cecil_fs::{ConfigStore, NormalizedPath};

/// Newest on-disk format version this crate reads and writes.
pub const SETTINGS_VERSION: u32 = 1;

/// All weaving preferences for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CecilSettings {
    /// On-disk format version
    pub version: u32,
    /// Keep generated static-reset methods in player builds
    pub include_reset_static_in_build: bool,
    /// Startup hook the static-reset method is registered on
    pub reset_static_mode: ResetStaticMode,
    /// Keep generated log calls in player builds
    pub include_logs_in_build: bool,
    pub method_log_format: String,
    /// Joins formatted parameters inside `%parameters%`
    pub parameters_separator: String,
    pub property_get_log_format: String,
    pub property_set_log_format: String,
    /// Keep generated timing code in player builds
    pub include_timed_in_build: bool,
    pub timed_method_format: String,
    pub timed_property_get_format: String,
    pub timed_property_set_format: String,
    pub mark_in_profiler_format: String,
}

impl Default for CecilSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            include_reset_static_in_build: true,
            reset_static_mode: ResetStaticMode::SubsystemRegistration,
            include_logs_in_build: true,
            method_log_format: "%class% %method% (%parameters%)".to_string(),
            parameters_separator: ", ".to_string(),
            property_get_log_format: "%property% Get %value%".to_string(),
            property_set_log_format: "%property% Set (Old: %old_value%, New: %new_value%)"
                .to_string(),
            include_timed_in_build: false,
            timed_method_format:
                "%class% %method% took %milliseconds% milliseconds (%ticks% ticks)".to_string(),
            timed_property_get_format:
                "%class% %property% Get took %milliseconds% milliseconds (%ticks% ticks)"
                    .to_string(),
            timed_property_set_format:
                "%class% %property% Set took %milliseconds% milliseconds (%ticks% ticks)"
                    .to_string(),
            mark_in_profiler_format: "%class% :: %method%".to_string(),
        }
    }
}

impl CecilSettings {
    /// Read a record from `path`, format chosen by extension.
    ///
    /// Fails on unreadable or malformed files and on files written by a
    /// newer format version.
    pub fn import_from(path: &NormalizedPath) -> Result<Self> {
        Self::import_with(&ConfigStore::new(), path)
    }

    pub(crate) fn import_with(store: &ConfigStore, path: &NormalizedPath) -> Result<Self> {
        let mut settings: CecilSettings = store.load(path)?;

        if settings.version > SETTINGS_VERSION {
            return Err(Error::UnsupportedVersion {
                path: path.to_native(),
                found: settings.version,
                supported: SETTINGS_VERSION,
            });
        }

        // Older files are upgraded in memory and rewritten on the next save
        settings.version = SETTINGS_VERSION;
        Ok(settings)
    }

    /// Write this record to `path`, format chosen by extension.
    pub fn export_to(&self, path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        Ok(())
    }
}
