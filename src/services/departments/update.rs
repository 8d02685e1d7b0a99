use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::DepartmentService;
use crate::errors::HelpdeskError;
use crate::models::departments::requests::UpdateDepartmentRequest;
use crate::models::departments::responses::DepartmentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_update_department;

pub async fn update_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
    update_data: UpdateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_update_department(&update_data) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DepartmentInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_department(department_id, update_data).await {
        Ok(Some(department)) => {
            info!("Department {} updated", department.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                DepartmentResponse { department },
                "Department updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(HelpdeskError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::DepartmentAlreadyExists,
                "Department name already exists",
            ),
        )),
        Err(e) => {
            error!("Department update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DepartmentUpdateFailed,
                    format!("Department update failed: {e}"),
                )),
            )
        }
    }
}
