use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{admin_only, employees, resource};
use crate::models::notifications::requests::{NotificationListParams, SendTestNotificationRequest};
use crate::services::NotificationService;
use crate::utils::SafeNotificationIdI64;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

// HTTP处理程序
pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListParams>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .list_notifications(&req, query.into_inner())
        .await
}

pub async fn get_notification_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.get_notification_stats(&req).await
}

pub async fn mark_as_read(
    req: HttpRequest,
    notification_id: SafeNotificationIdI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .mark_as_read(&req, notification_id.0)
        .await
}

pub async fn mark_all_as_read(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_all_as_read(&req).await
}

pub async fn delete_notification(
    req: HttpRequest,
    notification_id: SafeNotificationIdI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .delete_notification(&req, notification_id.0)
        .await
}

pub async fn send_test_notification(
    req: HttpRequest,
    body: web::Json<SendTestNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .send_test_notification(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .service(resource("").route(employees(web::get().to(list_notifications))))
            .service(resource("/stats").route(employees(web::get().to(get_notification_stats))))
            .service(resource("/read-all").route(employees(web::patch().to(mark_all_as_read))))
            .service(
                resource("/test").route(admin_only(web::post().to(send_test_notification))),
            )
            .service(resource("/{id}/read").route(employees(web::patch().to(mark_as_read))))
            .service(resource("/{id}").route(employees(web::delete().to(delete_notification)))),
    );
}
