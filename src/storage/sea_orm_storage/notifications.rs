//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{HelpdeskError, Result};
use crate::models::{
    PaginationInfo, normalize_pagination,
    notifications::{
        entities::{Notification, NotificationType},
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::{NotificationListResponse, NotificationStats},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建通知
    pub async fn create_notification_impl(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            notification_type: Set(req.notification_type.to_string()),
            title: Set(req.title),
            message: Set(req.message),
            ticket_id: Set(req.ticket_id),
            is_read: Set(false),
            read_at: Set(None),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("创建通知失败: {e}")))?;

        Ok(result.into_notification())
    }

    /// 通过 ID 获取通知
    pub async fn get_notification_by_id_impl(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.map(|m| m.into_notification()))
    }

    /// 列出用户通知（分页）
    pub async fn list_notifications_with_pagination_impl(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Notifications::find().filter(Column::UserId.eq(user_id));

        // 已读/未读筛选
        if let Some(is_read) = query.is_read {
            select = select.filter(Column::IsRead.eq(is_read));
        }

        // 类型筛选
        if let Some(notification_type) = query.notification_type {
            select = select.filter(Column::NotificationType.eq(notification_type.as_str()));
        }

        // 排序
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询通知总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询通知页数失败: {e}")))?;

        let notifications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 获取用户未读通知数量
    pub async fn get_unread_notification_count_impl(&self, user_id: i64) -> Result<i64> {
        let count = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询未读通知数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 用户通知统计
    pub async fn get_notification_stats_impl(&self, user_id: i64) -> Result<NotificationStats> {
        let total = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("统计通知总数失败: {e}")))?
            as i64;

        let unread = self.get_unread_notification_count_impl(user_id).await?;

        let mut stats = NotificationStats {
            total,
            unread,
            read: total - unread,
            ..Default::default()
        };

        for notification_type in NotificationType::ALL {
            let count = Notifications::find()
                .filter(Column::UserId.eq(user_id))
                .filter(Column::NotificationType.eq(notification_type.as_str()))
                .count(&self.db)
                .await
                .map_err(|e| {
                    HelpdeskError::database_operation(format!("按类型统计通知失败: {e}"))
                })?;

            stats
                .by_type
                .insert(notification_type.as_str().to_string(), count as i64);
        }

        Ok(stats)
    }

    /// 标记通知为已读，已读的通知保持原来的 read_at
    pub async fn mark_notification_as_read_impl(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>> {
        let now = chrono::Utc::now().timestamp();

        Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .col_expr(Column::ReadAt, sea_orm::sea_query::Expr::value(Some(now)))
            .filter(Column::Id.eq(notification_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("标记通知已读失败: {e}")))?;

        self.get_notification_by_id_impl(notification_id).await
    }

    /// 标记用户所有通知为已读
    pub async fn mark_all_notifications_as_read_impl(&self, user_id: i64) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();

        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .col_expr(Column::ReadAt, sea_orm::sea_query::Expr::value(Some(now)))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| {
                HelpdeskError::database_operation(format!("标记全部通知已读失败: {e}"))
            })?;

        Ok(result.rows_affected as i64)
    }

    /// 删除通知
    pub async fn delete_notification_impl(&self, notification_id: i64) -> Result<bool> {
        let result = Notifications::delete_by_id(notification_id)
            .exec(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("删除通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
