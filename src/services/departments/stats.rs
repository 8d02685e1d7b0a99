use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DepartmentService, ensure_department_exists};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_department_stats(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_department_exists(&storage, department_id).await {
        return Ok(resp);
    }

    match storage.get_department_stats(department_id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Department statistics retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get department statistics: {e}"),
            )),
        ),
    }
}
