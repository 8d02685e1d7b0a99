use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::departments::requests::{DepartmentListQuery, DepartmentQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
    query: DepartmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = DepartmentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        is_active: query.is_active,
    };

    match storage.list_departments_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Departments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list departments: {e}"),
            )),
        ),
    }
}
