use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{admin_only, agents_only, authenticated, resource};
use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentAgentsParams, DepartmentQueryParams,
    UpdateDepartmentRequest,
};
use crate::models::tickets::requests::TicketQueryParams;
use crate::services::DepartmentService;
use crate::utils::SafeDepartmentIdI64;

// 懒加载的全局 DepartmentService 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

// HTTP处理程序
pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(&req, department_data.into_inner())
        .await
}

pub async fn list_departments(
    req: HttpRequest,
    query: web::Query<DepartmentQueryParams>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_departments(&req, query.into_inner())
        .await
}

pub async fn get_department(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .get_department(&req, department_id.0)
        .await
}

pub async fn update_department(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
    update_data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .update_department(&req, department_id.0, update_data.into_inner())
        .await
}

pub async fn delete_department(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .delete_department(&req, department_id.0)
        .await
}

pub async fn list_department_agents(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
    query: web::Query<DepartmentAgentsParams>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_department_agents(&req, department_id.0, query.into_inner())
        .await
}

pub async fn list_department_tickets(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
    query: web::Query<TicketQueryParams>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_department_tickets(&req, department_id.0, query.into_inner())
        .await
}

pub async fn get_department_stats(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .get_department_stats(&req, department_id.0)
        .await
}

// 配置路由
pub fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/departments")
            .service(
                resource("")
                    // 部门列表公开
                    .route(web::get().to(list_departments))
                    .route(admin_only(web::post().to(create_department))),
            )
            .service(
                resource("/{id}")
                    .route(authenticated(web::get().to(get_department)))
                    .route(admin_only(web::put().to(update_department)))
                    .route(admin_only(web::delete().to(delete_department))),
            )
            .service(
                resource("/{id}/agents")
                    .route(agents_only(web::get().to(list_department_agents))),
            )
            .service(
                resource("/{id}/tickets")
                    .route(agents_only(web::get().to(list_department_tickets))),
            )
            .service(
                resource("/{id}/stats").route(agents_only(web::get().to(get_department_stats))),
            ),
    );
}
