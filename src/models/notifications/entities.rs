use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum NotificationType {
    TicketCreated,
    TicketAssigned,
    TicketUpdated,
    TicketComment,
    System,
}

impl NotificationType {
    pub const ALL: [NotificationType; 5] = [
        NotificationType::TicketCreated,
        NotificationType::TicketAssigned,
        NotificationType::TicketUpdated,
        NotificationType::TicketComment,
        NotificationType::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::TicketCreated => "TICKET_CREATED",
            NotificationType::TicketAssigned => "TICKET_ASSIGNED",
            NotificationType::TicketUpdated => "TICKET_UPDATED",
            NotificationType::TicketComment => "TICKET_COMMENT",
            NotificationType::System => "SYSTEM",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid notification type: {s}"))
    }
}

// 通知实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub ticket_id: Option<i64>,
    pub is_read: bool,
    pub read_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
