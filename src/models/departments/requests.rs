use crate::models::common::{PaginationQuery, deserialize_optional_bool};
use serde::Deserialize;
use ts_rs::TS;

// 部门查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub is_active: Option<bool>,
}

// 创建部门请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

// 更新部门请求，只更新提供的字段
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

// 部门列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct DepartmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

// 部门客服列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentAgentsParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}
