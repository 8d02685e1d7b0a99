use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{DepartmentService, ensure_department_exists};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_department_exists(&storage, department_id).await {
        return Ok(resp);
    }

    // 仍有工单的部门不允许删除
    match storage.count_department_tickets(department_id).await {
        Ok(0) => {}
        Ok(count) => {
            warn!(
                "Refusing to delete department {} with {} ticket(s)",
                department_id, count
            );
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DepartmentNotEmpty,
                format!("Department still has {count} ticket(s) and cannot be deleted"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count department tickets: {e}"),
                )),
            );
        }
    }

    match storage.delete_department(department_id).await {
        Ok(true) => {
            info!("Department {} deleted", department_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Department deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DepartmentDeleteFailed,
                format!("Department deletion failed: {e}"),
            )),
        ),
    }
}
