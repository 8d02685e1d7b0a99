use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::departments::responses::DepartmentResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_department_by_id(department_id).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentResponse { department },
            "Department retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get department information: {e}"),
            )),
        ),
    }
}
