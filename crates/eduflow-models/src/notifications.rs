//! Notification models.
//!
//! A notification either targets every role (`recipient_role: None`) or a
//! single role.

use crate::ids::NotificationId;
use chrono::{DateTime, Utc};
use eduflow_core::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub recipient_role: Option<Role>,
}

impl Notification {
    pub fn visible_to(&self, role: Role) -> bool {
        self.recipient_role.is_none_or(|recipient| recipient == role)
    }
}

/// Notifications addressed to `role`, in their original order.
pub fn visible_to(notifications: &[Notification], role: Role) -> Vec<&Notification> {
    notifications.iter().filter(|n| n.visible_to(role)).collect()
}

/// Unread notifications addressed to `role`.
pub fn unread_count(notifications: &[Notification], role: Role) -> usize {
    notifications
        .iter()
        .filter(|n| !n.is_read && n.visible_to(role))
        .count()
}
