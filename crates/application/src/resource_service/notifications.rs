use http::Method;
use permitdesk_core::AppResult;
use permitdesk_domain::{MarkAsReadInput, Notification, UnreadCount};
use serde_json::Value;

use super::{Notifications, ResourceClient};

impl ResourceClient<Notifications> {
    /// Lists unread notifications.
    pub async fn unread(&self) -> AppResult<Vec<Notification>> {
        self.fetch_list("/notifications/unread").await
    }

    /// Returns the number of unread notifications.
    pub async fn unread_count(&self) -> AppResult<u64> {
        self.fetch_data::<UnreadCount>("/notifications/unread/count")
            .await
            .map(|unread| unread.count)
    }

    /// Marks the given notifications as read.
    pub async fn mark_as_read(&self, notification_ids: &[i64]) -> AppResult<()> {
        let input = MarkAsReadInput {
            notification_ids: notification_ids.to_vec(),
        };

        self.send_unit(Method::POST, "/notifications/read", Some(&input))
            .await
    }

    /// Marks every notification as read.
    pub async fn mark_all_as_read(&self) -> AppResult<()> {
        self.send_unit(Method::POST, "/notifications/read/all", None::<&Value>)
            .await
    }
}
