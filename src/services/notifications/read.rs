use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{NotificationService, current_user, load_owned_notification};
use crate::models::notifications::responses::{MarkAllReadResponse, NotificationResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn mark_as_read(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let notification = match load_owned_notification(&storage, notification_id, user.id).await {
        Ok(notification) => notification,
        Err(resp) => return Ok(resp),
    };

    // 已读的通知直接返回
    if notification.is_read {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            NotificationResponse { notification },
            "Notification marked as read",
        )));
    }

    match storage.mark_notification_as_read(notification_id).await {
        Ok(Some(notification)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            NotificationResponse { notification },
            "Notification marked as read",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to mark notification as read: {e}"),
            )),
        ),
    }
}

pub async fn mark_all_as_read(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.mark_all_notifications_as_read(user.id).await {
        Ok(marked_count) => {
            debug!(
                "Marked {} notification(s) as read for user {}",
                marked_count, user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MarkAllReadResponse { marked_count },
                "All notifications marked as read",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to mark notifications as read: {e}"),
            )),
        ),
    }
}
