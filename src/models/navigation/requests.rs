use serde::Deserialize;
use ts_rs::TS;

// 导航查询参数：前端当前所在路径
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/navigation.ts")]
pub struct NavigationParams {
    pub path: Option<String>,
}
