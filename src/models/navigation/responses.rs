use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::UserRole;

/// 侧边栏底部显示的用户信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/navigation.ts")]
pub struct NavUser {
    pub name: String,
    pub role: UserRole,
}

/// 单个导航项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/navigation.ts")]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    pub icon: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// 导航响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/navigation.ts")]
pub struct NavigationResponse {
    pub user: Option<NavUser>,
    pub items: Vec<NavEntry>,
}
