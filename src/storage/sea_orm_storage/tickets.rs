//! 工单存储操作

use super::SeaOrmStorage;
use crate::entity::tickets::{ActiveModel, Column, Entity as Tickets};
use crate::errors::{HelpdeskError, Result};
use crate::models::{
    PaginationInfo, normalize_pagination,
    tickets::{
        entities::{Ticket, TicketStatus},
        requests::{CreateTicketRequest, TicketListQuery},
        responses::TicketListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建工单
    pub async fn create_ticket_impl(&self, req: CreateTicketRequest) -> Result<Ticket> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            status: Set(TicketStatus::Open.to_string()),
            priority: Set(req.priority.to_string()),
            department_id: Set(req.department_id),
            created_by: Set(req.created_by),
            assigned_to: Set(req.assigned_to),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("创建工单失败: {e}")))?;

        Ok(result.into_ticket())
    }

    /// 统计部门工单数量
    pub async fn count_department_tickets_impl(&self, department_id: i64) -> Result<u64> {
        Tickets::find()
            .filter(Column::DepartmentId.eq(department_id))
            .count(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("统计部门工单失败: {e}")))
    }

    /// 分页列出部门工单
    pub async fn list_department_tickets_impl(
        &self,
        department_id: i64,
        query: TicketListQuery,
    ) -> Result<TicketListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Tickets::find().filter(Column::DepartmentId.eq(department_id));

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(priority) = query.priority {
            select = select.filter(Column::Priority.eq(priority.to_string()));
        }

        // 最新的在前
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询工单总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询工单页数失败: {e}")))?;

        let tickets = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询工单列表失败: {e}")))?;

        Ok(TicketListResponse {
            items: tickets.into_iter().map(|m| m.into_ticket()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
