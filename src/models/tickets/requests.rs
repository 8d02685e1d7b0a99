use super::entities::{TicketPriority, TicketStatus};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 部门工单查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ticket.ts")]
pub struct TicketQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

// 工单列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct TicketListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

// 创建工单请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ticket.ts")]
pub struct CreateTicketRequest {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub department_id: i64,
    pub created_by: i64,
    pub assigned_to: Option<i64>,
}
