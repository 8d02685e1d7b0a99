//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod departments;
mod notifications;
mod tickets;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{HelpdeskError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实例
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::from_url(&config.database.url, &config.database).await
    }

    /// 通过指定 URL 创建存储实例并执行迁移
    pub async fn from_url(url: &str, config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| HelpdeskError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        // 内存库只能有一个连接，否则每个连接看到的是不同的库
        let pool_options = if in_memory {
            SqlitePoolOptions::new().max_connections(1).min_connections(1)
        } else {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| HelpdeskError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| HelpdeskError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(HelpdeskError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 部门模块
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        self.list_departments_with_pagination_impl(query).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    async fn count_department_tickets(&self, department_id: i64) -> Result<u64> {
        self.count_department_tickets_impl(department_id).await
    }

    async fn list_department_agents(
        &self,
        department_id: i64,
        page: i64,
        size: i64,
    ) -> Result<DepartmentAgentListResponse> {
        self.list_department_agents_impl(department_id, page, size)
            .await
    }

    async fn get_department_stats(&self, department_id: i64) -> Result<DepartmentStats> {
        self.get_department_stats_impl(department_id).await
    }

    // 工单模块
    async fn create_ticket(&self, ticket: CreateTicketRequest) -> Result<Ticket> {
        self.create_ticket_impl(ticket).await
    }

    async fn list_department_tickets(
        &self,
        department_id: i64,
        query: TicketListQuery,
    ) -> Result<TicketListResponse> {
        self.list_department_tickets_impl(department_id, query)
            .await
    }

    // 通知模块
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification> {
        self.create_notification_impl(notification).await
    }

    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>> {
        self.get_notification_by_id_impl(id).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, query)
            .await
    }

    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64> {
        self.get_unread_notification_count_impl(user_id).await
    }

    async fn get_notification_stats(&self, user_id: i64) -> Result<NotificationStats> {
        self.get_notification_stats_impl(user_id).await
    }

    async fn mark_notification_as_read(&self, id: i64) -> Result<Option<Notification>> {
        self.mark_notification_as_read_impl(id).await
    }

    async fn mark_all_notifications_as_read(&self, user_id: i64) -> Result<i64> {
        self.mark_all_notifications_as_read_impl(user_id).await
    }

    async fn delete_notification(&self, id: i64) -> Result<bool> {
        self.delete_notification_impl(id).await
    }
}
