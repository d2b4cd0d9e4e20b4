//! Core state and platform seams for the appshell application.
//! This crate is the single source of truth for shell-side behavior.

pub mod db;
pub mod logging;
pub mod model;
pub mod platform;
pub mod service;
pub mod store;

pub use db::{open_store, open_store_in_memory, DbError, DbResult, SqliteKeyValueStorage};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notification::{NewNotification, Notification, NotificationId, Severity};
pub use model::settings::{AppSettings, DataUsage};
pub use platform::{
    CacheSurface, DisplayMode, InstallChoice, InstallPrompt, KeyValueStorage, NativeNotification,
    NotificationSurface, PermissionState, Platform, PlatformError, PlatformResult, StorageEstimate,
    StorageEstimator,
};
pub use service::install_manager::{InstallManager, InstallState};
pub use service::notification_center::NotificationCenter;
pub use service::settings_store::{SettingsStore, SETTINGS_STORAGE_KEY};
pub use store::watched::{SubscriberId, Watched};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
