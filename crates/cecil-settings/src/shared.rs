//! Process-wide settings instance.
//!
//! Hosts that pass a [`SettingsStore`] around explicitly don't need this
//! module. Hosts that want one global store call [`init`] once at startup;
//! [`get_instance`] lazily opens the store from [`SettingsLayout::from_env`]
//! if nothing was installed first.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::layout::SettingsLayout;
use crate::store::SettingsStore;

static INSTANCE: OnceLock<Mutex<SettingsStore>> = OnceLock::new();

/// Install the shared store for `layout`.
///
/// Only the first call opens anything; later calls return the existing
/// instance and ignore `layout`.
pub fn init(layout: SettingsLayout) -> &'static Mutex<SettingsStore> {
    INSTANCE.get_or_init(|| {
        tracing::debug!(root = %layout.project_root(), "initializing shared settings");
        Mutex::new(SettingsStore::open(layout))
    })
}

/// The shared store, opened from the environment on first use.
pub fn get_instance() -> &'static Mutex<SettingsStore> {
    INSTANCE.get_or_init(|| Mutex::new(SettingsStore::open(SettingsLayout::from_env())))
}

/// True once [`init`] or [`get_instance`] has run.
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}

/// Lock the shared store. A poisoned lock is recovered, since every
/// mutation leaves the record in a consistent state.
pub fn lock() -> MutexGuard<'static, SettingsStore> {
    get_instance().lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` against the shared store.
pub fn with_instance<R>(f: impl FnOnce(&mut SettingsStore) -> R) -> R {
    f(&mut lock())
}
