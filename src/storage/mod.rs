use std::sync::Arc;

use crate::models::{
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
        responses::{DepartmentAgentListResponse, DepartmentListResponse, DepartmentStats},
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::{NotificationListResponse, NotificationStats},
    },
    tickets::{
        entities::Ticket,
        requests::{CreateTicketRequest, TicketListQuery},
        responses::TicketListResponse,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 部门管理方法
    // 创建部门
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    // 通过ID获取部门信息
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 列出部门
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse>;
    // 更新部门信息
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    // 删除部门，同时解除客服与部门的关联
    async fn delete_department(&self, id: i64) -> Result<bool>;
    // 统计部门下的工单数量
    async fn count_department_tickets(&self, department_id: i64) -> Result<u64>;
    // 列出部门客服
    async fn list_department_agents(
        &self,
        department_id: i64,
        page: i64,
        size: i64,
    ) -> Result<DepartmentAgentListResponse>;
    // 获取部门统计
    async fn get_department_stats(&self, department_id: i64) -> Result<DepartmentStats>;

    /// 工单方法
    // 创建工单
    async fn create_ticket(&self, ticket: CreateTicketRequest) -> Result<Ticket>;
    // 列出部门工单
    async fn list_department_tickets(
        &self,
        department_id: i64,
        query: TicketListQuery,
    ) -> Result<TicketListResponse>;

    /// 通知方法
    // 创建通知
    async fn create_notification(&self, notification: CreateNotificationRequest)
    -> Result<Notification>;
    // 通过ID获取通知
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    // 列出用户通知
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    // 获取用户未读通知数量
    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64>;
    // 获取用户通知统计
    async fn get_notification_stats(&self, user_id: i64) -> Result<NotificationStats>;
    // 标记通知为已读
    async fn mark_notification_as_read(&self, id: i64) -> Result<Option<Notification>>;
    // 标记用户所有通知为已读
    async fn mark_all_notifications_as_read(&self, user_id: i64) -> Result<i64>;
    // 删除通知
    async fn delete_notification(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
