pub mod agents;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod tickets;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentAgentsParams, DepartmentQueryParams,
    UpdateDepartmentRequest,
};
use crate::models::tickets::requests::TicketQueryParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DepartmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建部门
    pub async fn create_department(
        &self,
        request: &HttpRequest,
        department_data: CreateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, request, department_data).await
    }

    // 部门列表
    pub async fn list_departments(
        &self,
        request: &HttpRequest,
        query: DepartmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_departments(self, request, query).await
    }

    // 部门详情
    pub async fn get_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_department(self, request, department_id).await
    }

    // 更新部门
    pub async fn update_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
        update_data: UpdateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_department(self, request, department_id, update_data).await
    }

    // 删除部门
    pub async fn delete_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_department(self, request, department_id).await
    }

    // 部门客服列表
    pub async fn list_department_agents(
        &self,
        request: &HttpRequest,
        department_id: i64,
        query: DepartmentAgentsParams,
    ) -> ActixResult<HttpResponse> {
        agents::list_department_agents(self, request, department_id, query).await
    }

    // 部门工单列表
    pub async fn list_department_tickets(
        &self,
        request: &HttpRequest,
        department_id: i64,
        query: TicketQueryParams,
    ) -> ActixResult<HttpResponse> {
        tickets::list_department_tickets(self, request, department_id, query).await
    }

    // 部门统计
    pub async fn get_department_stats(
        &self,
        request: &HttpRequest,
        department_id: i64,
    ) -> ActixResult<HttpResponse> {
        stats::get_department_stats(self, request, department_id).await
    }
}

/// 确认部门存在，不存在时直接给出 404 响应
pub(crate) async fn ensure_department_exists(
    storage: &Arc<dyn Storage>,
    department_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_department_by_id(department_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get department information: {e}"),
            )),
        ),
    }
}
