//! Durable store for the project settings record.
//!
//! [`SettingsStore::open`] never fails. It resolves the record in a fixed
//! order:
//!
//! 1. A file at the legacy path is loaded and then deleted whether or not
//!    it parsed. A valid legacy record is adopted and written to the
//!    canonical path.
//! 2. With no canonical file, a default record is created and persisted.
//! 3. Otherwise the canonical file is loaded. A file that fails to load is
//!    deleted and replaced by a persisted default record.
//!
//! Every setter rewrites the whole file, even when the value is unchanged.

use cecil_fs::{ConfigStore, NormalizedPath, io};
use tracing::{debug, error, info, warn};

use crate::layout::SettingsLayout;
use crate::mode::ResetStaticMode;
use crate::record::CecilSettings;
use crate::Result;

/// Which branch of the open sequence produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Adopted from the legacy path.
    Migrated,
    /// No file existed, defaults were written.
    Created,
    /// Read from the canonical path.
    Loaded,
    /// The canonical file was unreadable and was replaced by defaults.
    Recovered,
}

/// Owns the settings record and keeps it in sync with disk.
///
/// The store lives for as long as the caller keeps it. It is
/// neither `Clone` nor serializable: only the record inside it is ever
/// written out, and only to the layout's canonical path or through
/// [`SettingsStore::export_to`].
#[derive(Debug)]
pub struct SettingsStore {
    layout: SettingsLayout,
    config: ConfigStore,
    settings: CecilSettings,
    origin: Origin,
}

macro_rules! copy_accessors {
    ($( $(#[$doc:meta])* $field:ident, $setter:ident: $ty:ty; )*) => {
        $(
            $(#[$doc])*
            pub fn $field(&self) -> $ty {
                self.settings.$field
            }

            #[doc = concat!("Set `", stringify!($field), "` and persist the record.")]
            pub fn $setter(&mut self, value: $ty) -> Result<()> {
                self.settings.$field = value;
                self.save()
            }
        )*
    };
}

macro_rules! string_accessors {
    ($( $(#[$doc:meta])* $field:ident, $setter:ident; )*) => {
        $(
            $(#[$doc])*
            pub fn $field(&self) -> &str {
                &self.settings.$field
            }

            #[doc = concat!("Set `", stringify!($field), "` and persist the record.")]
            pub fn $setter(&mut self, value: impl Into<String>) -> Result<()> {
                self.settings.$field = value.into();
                self.save()
            }
        )*
    };
}

impl SettingsStore {
    /// Open the settings for `layout` with default write robustness.
    pub fn open(layout: SettingsLayout) -> Self {
        Self::open_with(layout, ConfigStore::new())
    }

    /// Open the settings for `layout`, writing through `config`.
    pub fn open_with(layout: SettingsLayout, config: ConfigStore) -> Self {
        let (settings, origin) = resolve(&layout, &config);
        let store = Self {
            layout,
            config,
            settings,
            origin,
        };

        if origin != Origin::Loaded {
            // Failure is already logged, the record stays usable in memory
            let _ = store.save();
        }

        store
    }

    /// Persist the full record to the canonical path.
    ///
    /// Creates the directory tree if needed. A failed write is logged and
    /// returned, the in-memory record is kept either way.
    pub fn save(&self) -> Result<()> {
        let path = self.layout.canonical_path();

        match self.config.save(&path, &self.settings) {
            Ok(()) => {
                debug!(path = %path, "saved settings");
                Ok(())
            }
            Err(e) => {
                error!(path = %path, error = %e, "can't save cecil attribute settings");
                Err(e.into())
            }
        }
    }

    /// Discard the in-memory record and read the canonical file again.
    ///
    /// The legacy path is only consulted by [`SettingsStore::open`]; a file
    /// that appears there later is ignored.
    pub fn reload(&mut self) {
        let (settings, origin) = resolve_canonical(&self.layout, &self.config);
        self.settings = settings;
        self.origin = origin;

        if origin != Origin::Loaded {
            let _ = self.save();
        }
    }

    /// Replace every field with its default and persist.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.settings = CecilSettings::default();
        self.save()
    }

    /// Write a copy of the record to `path`, format chosen by extension.
    pub fn export_to(&self, path: &NormalizedPath) -> Result<()> {
        self.config.save(path, &self.settings)?;
        Ok(())
    }

    pub fn settings(&self) -> &CecilSettings {
        &self.settings
    }

    pub fn layout(&self) -> &SettingsLayout {
        &self.layout
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    copy_accessors! {
        /// Keep generated static-reset methods in player builds.
        include_reset_static_in_build, set_include_reset_static_in_build: bool;
        /// Startup hook for generated static-reset methods.
        reset_static_mode, set_reset_static_mode: ResetStaticMode;
        /// Keep generated log calls in player builds.
        include_logs_in_build, set_include_logs_in_build: bool;
        /// Keep generated timing code in player builds.
        include_timed_in_build, set_include_timed_in_build: bool;
    }

    string_accessors! {
        /// Template for method entry logs.
        method_log_format, set_method_log_format;
        /// Separator placed between parameters in `%parameters%`.
        parameters_separator, set_parameters_separator;
        /// Template for property getter logs.
        property_get_log_format, set_property_get_log_format;
        /// Template for property setter logs.
        property_set_log_format, set_property_set_log_format;
        timed_method_format, set_timed_method_format;
        timed_property_get_format, set_timed_property_get_format;
        timed_property_set_format, set_timed_property_set_format;
        /// Sample name used for profiler markers.
        mark_in_profiler_format, set_mark_in_profiler_format;
    }
}

fn resolve(layout: &SettingsLayout, config: &ConfigStore) -> (CecilSettings, Origin) {
    let legacy = layout.legacy_path();
    if legacy.is_file() {
        debug!(path = %legacy, "found settings at legacy path");
        let loaded = try_load(config, &legacy);
        discard(&legacy);

        if let Some(settings) = loaded {
            info!(
                from = %legacy,
                to = %layout.canonical_path(),
                "migrated cecil attribute settings"
            );
            return (settings, Origin::Migrated);
        }
    }

    resolve_canonical(layout, config)
}

fn resolve_canonical(layout: &SettingsLayout, config: &ConfigStore) -> (CecilSettings, Origin) {
    let canonical = layout.canonical_path();
    if !canonical.is_file() {
        info!(path = %canonical, "creating default cecil attribute settings");
        return (CecilSettings::default(), Origin::Created);
    }

    match try_load(config, &canonical) {
        Some(settings) => (settings, Origin::Loaded),
        None => {
            discard(&canonical);
            (CecilSettings::default(), Origin::Recovered)
        }
    }
}

fn try_load(config: &ConfigStore, path: &NormalizedPath) -> Option<CecilSettings> {
    match CecilSettings::import_with(config, path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(
                path = %path,
                error = %e,
                "couldn't load cecil attribute settings, settings will be reset"
            );
            None
        }
    }
}

/// Best-effort delete. A file that can't be removed is logged and left.
fn discard(path: &NormalizedPath) {
    if let Err(e) = io::remove_file(path) {
        warn!(path = %path, error = %e, "couldn't remove settings file");
    }
}
