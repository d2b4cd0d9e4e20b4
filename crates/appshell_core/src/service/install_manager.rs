//! Install lifecycle manager and platform capability operations.
//!
//! # Responsibility
//! - Track whether the application can be installed or already is.
//! - Expose permission, storage-estimate and cache-eviction operations.
//!
//! # Invariants
//! - A captured prompt handle exists iff the state is `Installable`.
//! - No operation raises to presentation code; failures degrade to
//!   negative or zero results.

use crate::platform::{
    CacheSurface, DisplayMode, InstallChoice, InstallPrompt, NativeNotification,
    NotificationSurface, PermissionState, Platform, StorageEstimate, StorageEstimator,
};
use log::{debug, error, info, warn};
use std::sync::Arc;

/// Install lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// No install opportunity has been signaled by the host.
    NotInstallable,
    /// The host signaled an install opportunity; a prompt handle is held.
    Installable,
    /// The application runs installed.
    Installed,
}

impl InstallState {
    /// Stable string id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotInstallable => "not_installable",
            Self::Installable => "installable",
            Self::Installed => "installed",
        }
    }
}

/// Install lifecycle state machine, one per running application.
///
/// Constructed and injected by top-level composition; there is no static
/// accessor.
pub struct InstallManager {
    state: InstallState,
    prompt: Option<Arc<dyn InstallPrompt>>,
    notifications: Option<Arc<dyn NotificationSurface>>,
    estimator: Option<Arc<dyn StorageEstimator>>,
    caches: Option<Arc<dyn CacheSurface>>,
}

impl InstallManager {
    /// Creates the manager from host capabilities.
    ///
    /// Starts `Installed` when the host reports standalone display,
    /// otherwise `NotInstallable`.
    pub fn new(platform: &Platform) -> Self {
        let state = match platform.display_mode() {
            DisplayMode::Standalone => InstallState::Installed,
            DisplayMode::Browser => InstallState::NotInstallable,
        };
        info!(
            "event=install_init module=install status=ok state={} display_mode={}",
            state.as_str(),
            platform.display_mode().as_str()
        );

        Self {
            state,
            prompt: None,
            notifications: platform.notifications(),
            estimator: platform.estimator(),
            caches: platform.caches(),
        }
    }

    /// Handles the host's install-opportunity signal.
    ///
    /// Captures the prompt handle and moves to `Installable`; a repeated
    /// signal replaces the previously captured handle. Ignored once
    /// installed.
    pub fn prompt_available(&mut self, prompt: Arc<dyn InstallPrompt>) {
        if self.state == InstallState::Installed {
            debug!("event=install_prompt_available module=install status=skip state=installed");
            return;
        }

        self.prompt = Some(prompt);
        self.state = InstallState::Installable;
        info!("event=install_prompt_available module=install status=ok");
    }

    /// Handles the host's app-installed signal.
    ///
    /// Valid from any state; drops any captured prompt handle.
    pub fn installed_signal(&mut self) {
        self.prompt = None;
        self.state = InstallState::Installed;
        info!("event=install_completed module=install status=ok source=host_signal");
    }

    /// Runs the captured install prompt and reports the outcome.
    ///
    /// # Contract
    /// - Returns `false` without state change unless `Installable`.
    /// - Acceptance moves to `Installed`; dismissal keeps `Installable`
    ///   with the handle retained.
    /// - Prompt failures are logged and reported as `false`, state and
    ///   handle unchanged.
    pub fn install(&mut self) -> bool {
        if self.state != InstallState::Installable {
            debug!(
                "event=install_prompt module=install status=skip state={}",
                self.state.as_str()
            );
            return false;
        }
        let Some(prompt) = self.prompt.clone() else {
            warn!("event=install_prompt module=install status=error error_code=missing_handle");
            return false;
        };

        match prompt.prompt() {
            Ok(InstallChoice::Accepted) => {
                self.prompt = None;
                self.state = InstallState::Installed;
                info!("event=install_completed module=install status=ok source=prompt");
                true
            }
            Ok(InstallChoice::Dismissed) => {
                info!("event=install_prompt module=install status=ok outcome=dismissed");
                false
            }
            Err(err) => {
                error!("event=install_prompt module=install status=error error={err}");
                false
            }
        }
    }

    /// Returns whether an explicit install can currently be offered.
    pub fn can_install(&self) -> bool {
        self.state == InstallState::Installable
    }

    pub fn is_installed(&self) -> bool {
        self.state == InstallState::Installed
    }

    pub fn state(&self) -> InstallState {
        self.state
    }

    /// Requests native-notification permission, idempotently.
    ///
    /// Prompts only while the decision is still `Undecided`; otherwise
    /// returns the current decision. `Denied` when the host has no
    /// notification surface.
    pub fn request_notification_permission(&self) -> PermissionState {
        let Some(surface) = &self.notifications else {
            return PermissionState::Denied;
        };

        match surface.permission() {
            PermissionState::Undecided => {
                let decided = surface.request_permission();
                info!(
                    "event=permission_request module=install status=ok outcome={}",
                    decided.as_str()
                );
                decided
            }
            decided => decided,
        }
    }

    /// Shows one native banner when permission is currently granted.
    ///
    /// Silently does nothing otherwise; show failures are logged and
    /// absorbed.
    pub fn show_notification(&self, notification: &NativeNotification) {
        let Some(surface) = &self.notifications else {
            return;
        };
        if surface.permission() != PermissionState::Granted {
            return;
        }

        if let Err(err) = surface.show(notification) {
            warn!("event=native_show module=install status=error error={err}");
        }
    }

    /// Best-effort storage usage and quota, zeroed when unsupported.
    pub fn storage_usage(&self) -> StorageEstimate {
        let Some(estimator) = &self.estimator else {
            return StorageEstimate::default();
        };

        match estimator.estimate() {
            Ok(estimate) => estimate,
            Err(err) => {
                warn!("event=storage_estimate module=install status=error error={err}");
                StorageEstimate::default()
            }
        }
    }

    /// Deletes every named cache this application controls.
    ///
    /// Returns the number of caches actually deleted; absent surface or
    /// enumeration failure yields 0, per-cache failures are skipped.
    pub fn clear_caches(&self) -> usize {
        let Some(caches) = &self.caches else {
            return 0;
        };

        let names = match caches.cache_names() {
            Ok(names) => names,
            Err(err) => {
                warn!(
                    "event=cache_clear module=install status=error \
                     error_code=enumerate_failed error={err}"
                );
                return 0;
            }
        };

        let mut deleted = 0;
        for name in &names {
            match caches.delete_cache(name) {
                Ok(true) => deleted += 1,
                Ok(false) => {}
                Err(err) => {
                    warn!("event=cache_clear module=install status=error cache={name} error={err}");
                }
            }
        }
        info!(
            "event=cache_clear module=install status=ok deleted={deleted} total={}",
            names.len()
        );
        deleted
    }
}
