//! In-app notification center.
//!
//! # Responsibility
//! - Own the ordered in-app notification collection.
//! - Mirror new entries to the native surface on a best-effort basis.
//!
//! # Invariants
//! - The collection stays ordered newest-first.
//! - Entry ids are unique for the collection lifetime.
//! - Native mirroring never affects the in-memory mutation.

use crate::model::notification::{NewNotification, Notification, NotificationId};
use crate::platform::{NativeNotification, NotificationSurface, PermissionState, Platform};
use crate::store::watched::{SubscriberId, Watched};
use log::{debug, warn};
use std::sync::Arc;

/// Icon reference forwarded with every native mirror.
const NATIVE_ICON: &str = "/favicon.svg";

/// Ordered collection of user-facing notifications.
pub struct NotificationCenter {
    items: Watched<Vec<Notification>>,
    native: Option<Arc<dyn NotificationSurface>>,
}

impl NotificationCenter {
    /// Creates a center bound to the host's notification surface, if any.
    pub fn new(platform: &Platform) -> Self {
        Self {
            items: Watched::new(Vec::new()),
            native: platform.notifications(),
        }
    }

    /// Creates a center with no native surface attached.
    pub fn detached() -> Self {
        Self {
            items: Watched::new(Vec::new()),
            native: None,
        }
    }

    /// Adds one notification and returns its generated id.
    ///
    /// # Contract
    /// - The new entry is prepended; ordering stays newest-first.
    /// - The in-memory add always succeeds; the native mirror is sent only
    ///   when permission is currently granted, and its failure is absorbed.
    pub fn add(&mut self, input: &NewNotification) -> NotificationId {
        let entry = Notification::from_input(input);
        let id = entry.id;

        let current = self.items.get();
        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(entry);
        next.extend(current.iter().cloned());
        self.items.set(next);

        debug!(
            "event=notification_add module=notify status=ok id={id} severity={}",
            input.severity.as_str()
        );
        self.mirror_to_native(id, input);
        id
    }

    /// Marks one entry as read. Silent no-op when `id` is absent.
    pub fn mark_read(&mut self, id: NotificationId) {
        let current = self.items.get();
        if !current.iter().any(|item| item.id == id && item.is_unread()) {
            return;
        }

        let next = current
            .iter()
            .cloned()
            .map(|mut item| {
                if item.id == id {
                    item.mark_read();
                }
                item
            })
            .collect();
        self.items.set(next);
    }

    /// Removes one entry. Silent no-op when `id` is absent.
    pub fn remove(&mut self, id: NotificationId) {
        let current = self.items.get();
        if !current.iter().any(|item| item.id == id) {
            return;
        }

        let next = current
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.items.set(next);
    }

    /// Empties the collection.
    pub fn clear_all(&mut self) {
        if self.items.get().is_empty() {
            return;
        }
        self.items.set(Vec::new());
    }

    /// Immutable snapshot of the collection, newest first.
    pub fn snapshot(&self) -> Arc<Vec<Notification>> {
        self.items.get()
    }

    pub fn len(&self) -> usize {
        self.items.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.get().is_empty()
    }

    /// Number of entries not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.items
            .get()
            .iter()
            .filter(|item| item.is_unread())
            .count()
    }

    /// Registers a subscriber notified with a fresh snapshot per change.
    pub fn subscribe(
        &mut self,
        subscriber: impl Fn(&Arc<Vec<Notification>>) + 'static,
    ) -> SubscriberId {
        self.items.subscribe(subscriber)
    }

    /// Removes one subscriber. Returns `false` when `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.items.unsubscribe(id)
    }

    fn mirror_to_native(&self, id: NotificationId, input: &NewNotification) {
        let Some(surface) = &self.native else {
            return;
        };
        if surface.permission() != PermissionState::Granted {
            return;
        }

        let banner = NativeNotification::new(input.title.as_str(), input.message.as_str())
            .with_icon(NATIVE_ICON)
            .with_tag(id.to_string());
        if let Err(err) = surface.show(&banner) {
            warn!("event=native_mirror module=notify status=error id={id} error={err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NotificationCenter;
    use crate::model::notification::{NewNotification, Severity};

    #[test]
    fn detached_center_starts_empty() {
        let center = NotificationCenter::detached();
        assert!(center.is_empty());
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn add_without_native_surface_succeeds() {
        let mut center = NotificationCenter::detached();
        let id = center.add(&NewNotification::new("T", "M", Severity::Info));

        let snapshot = center.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);
        assert_eq!(center.unread_count(), 1);
    }

    #[test]
    fn clear_all_on_empty_collection_publishes_nothing() {
        let mut center = NotificationCenter::detached();
        let before = center.snapshot();
        center.clear_all();
        assert!(std::sync::Arc::ptr_eq(&before, &center.snapshot()));
    }
}
