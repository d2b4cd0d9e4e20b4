//! Notification domain model.
//!
//! # Responsibility
//! - Define the record shown in the in-app notification list.
//! - Define the input shape used by callers creating new entries.
//!
//! # Invariants
//! - `id` is unique within one collection and never reused.
//! - `created_at` is Unix epoch milliseconds captured at creation.
//! - `read` starts `false` and is the only field mutated after creation.

use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one in-app notification.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NotificationId = Uuid;

/// User-facing severity for one notification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral informational message.
    Info,
    /// A requested action completed.
    Success,
    /// Something needs user attention soon.
    Warning,
    /// A requested action failed.
    Error,
}

impl Severity {
    /// Stable string id used in log events and host payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Caller-supplied fields for one new notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl NewNotification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// One entry in the in-app notification list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable id, also used as the native-surface de-duplication tag.
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub read: bool,
}

impl Notification {
    /// Creates an unread entry with a generated id and current timestamp.
    pub fn from_input(input: &NewNotification) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            message: input.message.clone(),
            severity: input.severity,
            created_at: now_epoch_ms(),
            read: false,
        }
    }

    /// Flags this entry as seen by the user.
    pub fn mark_read(&mut self) {
        self.read = true;
    }

    /// Returns whether this entry still needs user attention.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
