pub mod delete;
pub mod list;
pub mod read;
pub mod send_test;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::notifications::entities::Notification;
use crate::models::notifications::requests::{NotificationListParams, SendTestNotificationRequest};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 当前用户的通知列表
    pub async fn list_notifications(
        &self,
        request: &HttpRequest,
        query: NotificationListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, request, query).await
    }

    // 当前用户的通知统计
    pub async fn get_notification_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_notification_stats(self, request).await
    }

    // 标记单条已读
    pub async fn mark_as_read(
        &self,
        request: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        read::mark_as_read(self, request, notification_id).await
    }

    // 标记全部已读
    pub async fn mark_all_as_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        read::mark_all_as_read(self, request).await
    }

    // 删除通知
    pub async fn delete_notification(
        &self,
        request: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, request, notification_id).await
    }

    // 发送测试通知（管理员）
    pub async fn send_test_notification(
        &self,
        request: &HttpRequest,
        req: SendTestNotificationRequest,
    ) -> ActixResult<HttpResponse> {
        send_test::send_test_notification(self, request, req).await
    }
}

/// 取出当前登录用户，缺失时返回 401 响应
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user id",
        ))
    })
}

/// 加载通知并校验归属；不存在或不属于当前用户都按 404 处理
pub(crate) async fn load_owned_notification(
    storage: &Arc<dyn Storage>,
    notification_id: i64,
    user_id: i64,
) -> Result<Notification, HttpResponse> {
    match storage.get_notification_by_id(notification_id).await {
        Ok(Some(notification)) if notification.user_id == user_id => Ok(notification),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get notification: {e}"),
            )),
        ),
    }
}
