use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DepartmentService, ensure_department_exists};
use crate::models::tickets::requests::{TicketListQuery, TicketQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_department_tickets(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
    query: TicketQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_department_exists(&storage, department_id).await {
        return Ok(resp);
    }

    let list_query = TicketListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        status: query.status,
        priority: query.priority,
    };

    match storage
        .list_department_tickets(department_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Department tickets retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list department tickets: {e}"),
            )),
        ),
    }
}
