use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{NotificationService, current_user};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_notification_stats(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.get_notification_stats(user.id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Notification statistics retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get notification statistics: {e}"),
            )),
        ),
    }
}
