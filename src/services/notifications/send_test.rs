use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{NotificationService, current_user};
use crate::models::notifications::entities::NotificationType;
use crate::models::notifications::requests::{
    CreateNotificationRequest, SendTestNotificationRequest,
};
use crate::models::notifications::responses::NotificationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_test_notification;

pub const DEFAULT_TEST_TITLE: &str = "Test notification";
pub const DEFAULT_TEST_MESSAGE: &str =
    "This is a test notification sent by an administrator to verify delivery.";

pub async fn send_test_notification(
    service: &NotificationService,
    request: &HttpRequest,
    req: SendTestNotificationRequest,
) -> ActixResult<HttpResponse> {
    let admin = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = validate_test_notification(&req) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NotificationInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    // 未指定接收者时发给自己
    let target_id = req.user_id.unwrap_or(admin.id);
    match storage.get_user_by_id(target_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Target user not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get user information: {e}"),
                )),
            );
        }
    }

    let create_req = CreateNotificationRequest {
        user_id: target_id,
        notification_type: req.notification_type.unwrap_or(NotificationType::System),
        title: req
            .title
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TEST_TITLE.to_string()),
        message: req
            .message
            .map(|m| m.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TEST_MESSAGE.to_string()),
        ticket_id: None,
    };

    match storage.create_notification(create_req).await {
        Ok(notification) => {
            info!(
                "Test notification {} sent to user {} by admin {}",
                notification.id, target_id, admin.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                NotificationResponse { notification },
                "Test notification sent successfully",
            )))
        }
        Err(e) => {
            error!("Failed to send test notification: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NotificationCreationFailed,
                    format!("Failed to send test notification: {e}"),
                )),
            )
        }
    }
}
