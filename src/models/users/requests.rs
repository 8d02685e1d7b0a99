use super::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户创建请求（用于初始化和运维导入）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department_id: Option<i64>,
}
