use serde::{Deserialize, Serialize};

/// 全局配置，对应配置文件中的各个顶层表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cors: CorsConfig,
    pub bootstrap: BootstrapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// 显示在启动日志中的系统名称
    pub system_name: String,
    /// development / production
    pub environment: String,
    /// tracing EnvFilter 表达式
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 非空时监听 Unix socket 而不是 TCP
    pub unix_socket_path: String,
    /// 0 表示按 CPU 核数
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: ServerTimeouts,
    pub limits: ServerLimits,
}

/// 连接相关超时，client_* 单位毫秒，keep_alive 单位秒
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTimeouts {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerLimits {
    /// 请求体上限（字节）
    pub max_payload_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    #[serde(skip_serializing, default)]
    pub secret: String,
    /// access token 有效期（分钟）
    pub access_token_expiry: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlite 文件路径、`sqlite:` / `postgres://` / `mysql://` URL
    pub url: String,
    pub pool_size: u32,
    /// 连接与获取连接的超时（秒）
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 注册表中的后端名称：moka 或 redis
    #[serde(rename = "type")]
    pub cache_type: String,
    /// 认证用户缓存的 TTL（秒）
    pub default_ttl: u64,
    pub redis: RedisCacheConfig,
    pub memory: MemoryCacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisCacheConfig {
    pub url: String,
    pub key_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCacheConfig {
    pub max_capacity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// 包含 "*" 时允许任意来源
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

/// 空库首次启动时创建的管理员账号
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    pub admin_name: String,
    pub admin_email: String,
    /// 创建后是否在日志中输出一次管理员 access token
    pub print_admin_token: bool,
}
