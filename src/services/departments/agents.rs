use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DepartmentService, ensure_department_exists};
use crate::models::departments::requests::DepartmentAgentsParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_department_agents(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
    query: DepartmentAgentsParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_department_exists(&storage, department_id).await {
        return Ok(resp);
    }

    match storage
        .list_department_agents(department_id, query.pagination.page, query.pagination.size)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Department agents retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list department agents: {e}"),
            )),
        ),
    }
}
