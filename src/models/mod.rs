//! 数据模型定义
//!
//! `entities` 是业务实体，`requests` 是请求参数，`responses` 是响应载荷；
//! 所有对外类型都通过 ts-rs 导出给前端。

pub mod common;
pub mod departments;
pub mod navigation;
pub mod notifications;
pub mod tickets;
pub mod users;

pub use common::{
    ApiResponse, ErrorCode, HealthResponse, PaginationInfo, PaginationQuery, RouteNotFoundData,
    normalize_pagination,
};

/// 程序启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
