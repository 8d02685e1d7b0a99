use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 部门实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
