//! Surface trait contracts implemented by the embedding host.
//!
//! Implementations wrap whatever the host exposes (browser APIs, desktop
//! shells, test fakes). The core only talks to these seams.

use super::PlatformResult;

/// Host decision state for native notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// The user has not been asked yet.
    Undecided,
    Granted,
    Denied,
}

impl PermissionState {
    /// Stable string id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undecided => "undecided",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Payload for one native notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeNotification {
    pub title: String,
    pub body: String,
    /// Host-resolvable icon reference.
    pub icon: Option<String>,
    /// De-duplication tag; banners sharing a tag coalesce host-side.
    pub tag: Option<String>,
}

impl NativeNotification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
            tag: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Native notification presentation surface.
pub trait NotificationSurface {
    /// Current permission state without prompting the user.
    fn permission(&self) -> PermissionState;

    /// Asks the user to decide and returns the resulting state.
    ///
    /// Hosts may resolve this without any visible prompt when the decision
    /// is already persisted on their side.
    fn request_permission(&self) -> PermissionState;

    /// Presents one banner.
    fn show(&self, notification: &NativeNotification) -> PlatformResult<()>;
}

/// Outcome of one install prompt round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Accepted,
    Dismissed,
}

/// Captured handle for one host install opportunity.
///
/// The host hands one of these to the core when it signals that an install
/// is currently possible; invoking it consumes the user's attention, not
/// the handle.
pub trait InstallPrompt {
    /// Presents the install prompt and reports the user's choice.
    fn prompt(&self) -> PlatformResult<InstallChoice>;
}

/// Durable string key-value storage surface.
pub trait KeyValueStorage {
    /// Returns the stored value for `key`, if any.
    fn read(&self, key: &str) -> PlatformResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> PlatformResult<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> PlatformResult<()>;
}

/// Best-effort storage usage and quota report, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageEstimate {
    pub used_bytes: u64,
    pub quota_bytes: u64,
}

/// Storage usage estimation surface.
pub trait StorageEstimator {
    fn estimate(&self) -> PlatformResult<StorageEstimate>;
}

/// Named response-cache surface.
pub trait CacheSurface {
    /// Names of every cache under this application's control.
    fn cache_names(&self) -> PlatformResult<Vec<String>>;

    /// Deletes one cache. Returns `false` when no cache has that name.
    fn delete_cache(&self, name: &str) -> PlatformResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::{NativeNotification, PermissionState};

    #[test]
    fn permission_state_exposes_stable_ids() {
        assert_eq!(PermissionState::Undecided.as_str(), "undecided");
        assert_eq!(PermissionState::Granted.as_str(), "granted");
        assert_eq!(PermissionState::Denied.as_str(), "denied");
        assert!(PermissionState::Granted.is_granted());
        assert!(!PermissionState::Denied.is_granted());
    }

    #[test]
    fn native_notification_builder_sets_optional_fields() {
        let banner = NativeNotification::new("Update ready", "Restart to apply")
            .with_icon("/favicon.svg")
            .with_tag("update-banner");
        assert_eq!(banner.icon.as_deref(), Some("/favicon.svg"));
        assert_eq!(banner.tag.as_deref(), Some("update-banner"));
    }
}
