//! 部门存储操作

use super::SeaOrmStorage;
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::entity::{tickets, users};
use crate::errors::{HelpdeskError, Result};
use crate::models::{
    PaginationInfo, normalize_pagination,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
        responses::{DepartmentAgentListResponse, DepartmentListResponse, DepartmentStats},
    },
    tickets::entities::TicketStatus,
    users::entities::UserRole,
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait,
};

// 唯一约束冲突转换为 Conflict，其余为数据库错误
fn map_write_error(e: DbErr, action: &str) -> HelpdeskError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        HelpdeskError::conflict("部门名称已存在")
    } else {
        HelpdeskError::database_operation(format!("{action}失败: {e}"))
    }
}

impl SeaOrmStorage {
    /// 创建部门
    pub async fn create_department_impl(
        &self,
        req: CreateDepartmentRequest,
    ) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            description: Set(req.description),
            email: Set(req.email),
            is_active: Set(req.is_active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "创建部门"))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取部门
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询部门失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出部门
    pub async fn list_departments_with_pagination_impl(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Departments::find();

        // 名称搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            // 转义后的 `%` `_` 需要显式的 ESCAPE 子句，SQLite 没有默认转义符
            let pattern = format!("%{}%", escape_like_pattern(search.trim()));
            select = select.filter(Column::Name.like(LikeExpr::new(pattern).escape('\\')));
        }

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询部门总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询部门页数失败: {e}")))?;

        let departments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询部门列表失败: {e}")))?;

        Ok(DepartmentListResponse {
            items: departments
                .into_iter()
                .map(|m| m.into_department())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新部门信息，只更新提供的字段
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        if self.get_department_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, "更新部门"))?;

        Ok(Some(result.into_department()))
    }

    /// 删除部门
    ///
    /// 在同一事务内把部门下的用户 `department_id` 置空，再删除部门本身。
    /// 调用方需要先确认部门下没有工单。
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("开启事务失败: {e}")))?;

        users::Entity::update_many()
            .col_expr(
                users::Column::DepartmentId,
                sea_orm::sea_query::Expr::value(Option::<i64>::None),
            )
            .filter(users::Column::DepartmentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("解除部门成员失败: {e}")))?;

        let result = Departments::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("删除部门失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出部门客服
    pub async fn list_department_agents_impl(
        &self,
        department_id: i64,
        page: i64,
        size: i64,
    ) -> Result<DepartmentAgentListResponse> {
        let (page, size) = normalize_pagination(Some(page), Some(size));

        let select = users::Entity::find()
            .filter(users::Column::DepartmentId.eq(department_id))
            .filter(users::Column::Role.eq(UserRole::AGENT))
            .order_by_asc(users::Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询客服总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询客服页数失败: {e}")))?;

        let agents = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询客服列表失败: {e}")))?;

        Ok(DepartmentAgentListResponse {
            items: agents.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 部门统计
    pub async fn get_department_stats_impl(&self, department_id: i64) -> Result<DepartmentStats> {
        let agent_count = users::Entity::find()
            .filter(users::Column::DepartmentId.eq(department_id))
            .filter(users::Column::Role.eq(UserRole::AGENT))
            .count(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("统计部门客服失败: {e}")))?;

        let tickets_of =
            || tickets::Entity::find().filter(tickets::Column::DepartmentId.eq(department_id));

        let mut stats = DepartmentStats {
            department_id,
            agent_count: agent_count as i64,
            ..Default::default()
        };

        for status in TicketStatus::ALL {
            let count = tickets_of()
                .filter(tickets::Column::Status.eq(status.as_str()))
                .count(&self.db)
                .await
                .map_err(|e| HelpdeskError::database_operation(format!("统计部门工单失败: {e}")))?
                as i64;

            match status {
                TicketStatus::Open => stats.open_tickets = count,
                TicketStatus::InProgress => stats.in_progress_tickets = count,
                TicketStatus::Resolved => stats.resolved_tickets = count,
                TicketStatus::Closed => stats.closed_tickets = count,
            }
            stats.total_tickets += count;
        }

        stats.unassigned_tickets = tickets_of()
            .filter(tickets::Column::AssignedTo.is_null())
            .count(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("统计未分配工单失败: {e}")))?
            as i64;

        Ok(stats)
    }
}
