use serde::Serialize;
use ts_rs::TS;

use super::entities::Department;
use crate::models::common::PaginationInfo;
use crate::models::users::entities::User;

// 部门响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentResponse {
    pub department: Department,
}

// 部门列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentListResponse {
    pub items: Vec<Department>,
    pub pagination: PaginationInfo,
}

// 部门客服列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentAgentListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}

/// 部门统计
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentStats {
    pub department_id: i64,
    pub agent_count: i64,
    pub total_tickets: i64,
    pub open_tickets: i64,
    pub in_progress_tickets: i64,
    pub resolved_tickets: i64,
    pub closed_tickets: i64,
    pub unassigned_tickets: i64,
}
