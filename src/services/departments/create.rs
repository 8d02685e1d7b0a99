use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::DepartmentService;
use crate::errors::HelpdeskError;
use crate::middlewares::RequireJWT;
use crate::models::departments::requests::CreateDepartmentRequest;
use crate::models::departments::responses::DepartmentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_create_department;

pub async fn create_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_data: CreateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_create_department(&department_data) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DepartmentInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);
    let uid = RequireJWT::extract_user_id(request).unwrap_or_default();

    match storage.create_department(department_data).await {
        Ok(department) => {
            info!("Department {} created by user {}", department.name, uid);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                DepartmentResponse { department },
                "Department created successfully",
            )))
        }
        Err(HelpdeskError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::DepartmentAlreadyExists,
                "Department name already exists",
            ),
        )),
        Err(e) => {
            error!("Department creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DepartmentCreationFailed,
                    format!("Department creation failed: {e}"),
                )),
            )
        }
    }
}
