//! Host platform capability seams.
//!
//! # Responsibility
//! - Aggregate the host surfaces the running environment actually provides.
//! - Keep capability availability explicit instead of probed ad hoc.
//!
//! # Invariants
//! - Availability is fixed at `Platform` construction; call sites never
//!   re-probe the host.
//! - An absent surface degrades to a safe default at the call site, never
//!   to an error raised at presentation code.

mod surfaces;

pub use surfaces::{
    CacheSurface, InstallChoice, InstallPrompt, KeyValueStorage, NativeNotification,
    NotificationSurface, PermissionState, StorageEstimate, StorageEstimator,
};

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Error reported by host surface implementations.
#[derive(Debug)]
pub enum PlatformError {
    /// The capability is not provided by the running host.
    Unavailable(&'static str),
    /// The host accepted the call but could not complete it.
    Backend(String),
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(capability) => {
                write!(f, "platform capability is unavailable: {capability}")
            }
            Self::Backend(message) => write!(f, "platform call failed: {message}"),
        }
    }
}

impl Error for PlatformError {}

/// How the host currently displays the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Hosted inside regular browser chrome.
    #[default]
    Browser,
    /// Running without browser chrome, i.e. installed.
    Standalone,
}

impl DisplayMode {
    /// Stable string id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Standalone => "standalone",
        }
    }
}

/// Host capability aggregate injected at composition time.
///
/// Each surface is either available (`Some`) or unavailable (`None`),
/// decided once when the embedding host builds the platform value.
#[derive(Clone, Default)]
pub struct Platform {
    display_mode: DisplayMode,
    notifications: Option<Arc<dyn NotificationSurface>>,
    storage: Option<Arc<dyn KeyValueStorage>>,
    estimator: Option<Arc<dyn StorageEstimator>>,
    caches: Option<Arc<dyn CacheSurface>>,
}

impl Platform {
    /// Platform with every surface absent, displayed in browser chrome.
    ///
    /// Useful for headless runs and tests; every dependent operation
    /// degrades to its documented safe default.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_notifications(mut self, surface: Arc<dyn NotificationSurface>) -> Self {
        self.notifications = Some(surface);
        self
    }

    pub fn with_storage(mut self, surface: Arc<dyn KeyValueStorage>) -> Self {
        self.storage = Some(surface);
        self
    }

    pub fn with_estimator(mut self, surface: Arc<dyn StorageEstimator>) -> Self {
        self.estimator = Some(surface);
        self
    }

    pub fn with_caches(mut self, surface: Arc<dyn CacheSurface>) -> Self {
        self.caches = Some(surface);
        self
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn notifications(&self) -> Option<Arc<dyn NotificationSurface>> {
        self.notifications.clone()
    }

    pub fn storage(&self) -> Option<Arc<dyn KeyValueStorage>> {
        self.storage.clone()
    }

    pub fn estimator(&self) -> Option<Arc<dyn StorageEstimator>> {
        self.estimator.clone()
    }

    pub fn caches(&self) -> Option<Arc<dyn CacheSurface>> {
        self.caches.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayMode, Platform, PlatformError};

    #[test]
    fn detached_platform_has_no_surfaces() {
        let platform = Platform::detached();
        assert_eq!(platform.display_mode(), DisplayMode::Browser);
        assert!(platform.notifications().is_none());
        assert!(platform.storage().is_none());
        assert!(platform.estimator().is_none());
        assert!(platform.caches().is_none());
    }

    #[test]
    fn display_mode_can_be_injected() {
        let platform = Platform::detached().with_display_mode(DisplayMode::Standalone);
        assert_eq!(platform.display_mode(), DisplayMode::Standalone);
        assert_eq!(platform.display_mode().as_str(), "standalone");
    }

    #[test]
    fn errors_render_capability_and_backend_details() {
        let unavailable = PlatformError::Unavailable("caches");
        assert!(unavailable.to_string().contains("caches"));

        let backend = PlatformError::Backend("quota query rejected".to_string());
        assert!(backend.to_string().contains("quota query rejected"));
    }
}
