use serde::{Deserialize, Serialize};

/// Why a permit notification was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Permit expires within the reminder window.
    ExpiryReminder,
    /// Permit expires within the warning window.
    ExpiryWarning,
    /// Permit has expired.
    Expired,
    /// Kind added by a newer server.
    #[serde(other)]
    Other,
}

/// Permit summary embedded in notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitPreview {
    /// Permit identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Number printed on the permit.
    pub permit_no: String,
    /// End of validity (ISO-8601).
    pub expiry_date: String,
}

/// Per-user permit expiry notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification identifier.
    pub id: i64,
    /// Recipient.
    pub user_id: i64,
    /// Permit the notification is about.
    pub permit_id: i64,
    /// Notification kind.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the recipient has read it.
    #[serde(default)]
    pub is_read: bool,
    /// Read timestamp (ISO-8601).
    #[serde(default)]
    pub read_at: Option<String>,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Permit preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit: Option<PermitPreview>,
}

/// Unread notification counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    /// Number of unread notifications.
    pub count: u64,
}

/// Payload marking notifications as read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAsReadInput {
    /// Notifications to mark.
    pub notification_ids: Vec<i64>,
}
