//! Persisted application settings store.
//!
//! # Responsibility
//! - Own the in-memory settings record and its persisted copy.
//! - Merge persisted values over defaults on load.
//!
//! # Invariants
//! - The in-memory record is always fully populated.
//! - Only `save` persists; `replace`/`update` stay session-local.
//! - `load` and `save` never raise to presentation code.

use crate::model::settings::AppSettings;
use crate::platform::{KeyValueStorage, Platform};
use crate::store::watched::{SubscriberId, Watched};
use log::{debug, error, info};
use std::sync::Arc;

/// Storage key holding the serialized settings record.
pub const SETTINGS_STORAGE_KEY: &str = "appshell.settings";

/// Single mutable configuration record with durable persistence.
pub struct SettingsStore {
    current: Watched<AppSettings>,
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl SettingsStore {
    /// Creates a store bound to the host's storage surface, if any.
    ///
    /// Starts at defaults; call `load` to restore persisted values.
    pub fn new(platform: &Platform) -> Self {
        Self {
            current: Watched::new(AppSettings::default()),
            storage: platform.storage(),
        }
    }

    /// Creates a session-only store with no storage surface.
    pub fn detached() -> Self {
        Self {
            current: Watched::new(AppSettings::default()),
            storage: None,
        }
    }

    /// Restores persisted settings, merging them over defaults.
    ///
    /// # Contract
    /// - Absent storage surface or absent key keeps the current record.
    /// - Malformed persisted data is logged and keeps the current record.
    /// - Never raises to the caller.
    pub fn load(&mut self) {
        let Some(storage) = &self.storage else {
            debug!("event=settings_load module=settings status=skip reason=no_storage");
            return;
        };

        let raw = match storage.read(SETTINGS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=settings_load module=settings status=ok source=defaults");
                return;
            }
            Err(err) => {
                error!(
                    "event=settings_load module=settings status=error \
                     error_code=storage_read_failed error={err}"
                );
                return;
            }
        };

        match serde_json::from_str::<AppSettings>(&raw) {
            Ok(parsed) => {
                self.current.set(parsed);
                info!("event=settings_load module=settings status=ok source=storage");
            }
            Err(err) => {
                error!(
                    "event=settings_load module=settings status=error \
                     error_code=parse_failed error={err}"
                );
            }
        }
    }

    /// Persists `settings`, then replaces the in-memory record with it.
    ///
    /// # Contract
    /// - The in-memory replace happens even without a durable surface
    ///   (settings become session-only) and even when the write fails.
    /// - Storage failures are logged and absorbed.
    pub fn save(&mut self, settings: AppSettings) {
        match serde_json::to_string(&settings) {
            Ok(raw) => self.persist(&raw),
            Err(err) => {
                error!(
                    "event=settings_save module=settings status=error \
                     error_code=encode_failed error={err}"
                );
            }
        }
        self.current.set(settings);
    }

    /// Replaces the in-memory record without persisting.
    pub fn replace(&mut self, settings: AppSettings) {
        self.current.set(settings);
    }

    /// Applies an in-place edit to the in-memory record without persisting.
    pub fn update(&mut self, edit: impl FnOnce(&mut AppSettings)) {
        let mut next = (*self.current.get()).clone();
        edit(&mut next);
        self.current.set(next);
    }

    /// Immutable snapshot of the current record.
    pub fn current(&self) -> Arc<AppSettings> {
        self.current.get()
    }

    /// Registers a subscriber notified with a fresh snapshot per change.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Arc<AppSettings>) + 'static) -> SubscriberId {
        self.current.subscribe(subscriber)
    }

    /// Removes one subscriber. Returns `false` when `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.current.unsubscribe(id)
    }

    fn persist(&self, raw: &str) {
        let Some(storage) = &self.storage else {
            debug!("event=settings_save module=settings status=skip reason=no_storage");
            return;
        };

        match storage.write(SETTINGS_STORAGE_KEY, raw) {
            Ok(()) => debug!("event=settings_save module=settings status=ok"),
            Err(err) => {
                error!(
                    "event=settings_save module=settings status=error \
                     error_code=storage_write_failed error={err}"
                );
            }
        }
    }
}
