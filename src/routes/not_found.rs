use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode, RouteNotFoundData};

/// 未匹配任何路由时的兜底处理
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    // 与请求中一致的路径和查询字符串
    let url = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string());
    let method = req.method().to_string();

    debug!("No route matched {} {}", method, url);

    HttpResponse::NotFound().json(ApiResponse::error(
        ErrorCode::RouteNotFound,
        RouteNotFoundData {
            path: url.clone(),
            method,
        },
        format!("Route {url} not found"),
    ))
}
