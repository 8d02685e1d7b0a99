use serde::Serialize;
use ts_rs::TS;

use super::entities::Ticket;
use crate::models::common::PaginationInfo;

// 工单列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ticket.ts")]
pub struct TicketListResponse {
    pub items: Vec<Ticket>,
    pub pagination: PaginationInfo,
}
