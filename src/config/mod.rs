//! 配置管理
//!
//! 配置来源（优先级从低到高）：内置默认值、`config.toml`、`config.<APP_ENV>.toml`、
//! `HELPDESK_` 前缀环境变量以及常用的快捷环境变量。

mod r#impl;
mod structs;

pub use structs::*;
