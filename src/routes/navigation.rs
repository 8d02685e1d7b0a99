use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{employees, resource};
use crate::models::navigation::requests::NavigationParams;
use crate::services::NavigationService;

// 懒加载的全局 NavigationService 实例
static NAVIGATION_SERVICE: Lazy<NavigationService> = Lazy::new(NavigationService::new_lazy);

pub async fn get_navigation(
    req: HttpRequest,
    query: web::Query<NavigationParams>,
) -> ActixResult<HttpResponse> {
    NAVIGATION_SERVICE
        .get_navigation(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_navigation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        resource("/api/v1/navigation").route(employees(web::get().to(get_navigation))),
    );
}
