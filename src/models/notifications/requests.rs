use super::entities::NotificationType;
use crate::models::common::{PaginationQuery, deserialize_optional_bool};
use serde::Deserialize;
use ts_rs::TS;

// 通知列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub is_read: Option<bool>,
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
}

// 通知列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct NotificationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_read: Option<bool>,
    pub notification_type: Option<NotificationType>,
}

// 创建通知请求（存储层）
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub ticket_id: Option<i64>,
}

// 发送测试通知请求（管理员）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct SendTestNotificationRequest {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
}
