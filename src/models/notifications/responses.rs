use serde::Serialize;
use std::collections::HashMap;
use ts_rs::TS;

use super::entities::Notification;
use crate::models::common::pagination::PaginationInfo;

/// 通知响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationResponse {
    pub notification: Notification,
}

/// 通知列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub pagination: PaginationInfo,
}

/// 通知统计
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationStats {
    pub total: i64,
    pub unread: i64,
    pub read: i64,
    pub by_type: HashMap<String, i64>,
}

/// 标记全部已读响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct MarkAllReadResponse {
    pub marked_count: i64,
}
