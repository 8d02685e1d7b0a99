use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{NotificationService, current_user};
use crate::models::notifications::requests::{NotificationListParams, NotificationListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
    query: NotificationListParams,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let list_query = NotificationListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        is_read: query.is_read,
        notification_type: query.notification_type,
    };

    match storage
        .list_notifications_with_pagination(user.id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Notifications retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list notifications: {e}"),
            )),
        ),
    }
}
