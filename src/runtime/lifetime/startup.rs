use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 按名称构造缓存后端
async fn try_cache_backend(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let Some(constructor) = get_object_cache_plugin(name) else {
        warn!("Cache backend '{}' not found in registry", name);
        return None;
    };

    match constructor().await {
        Ok(cache) => {
            info!("Created {} cache backend", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Failed to create {} cache: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    debug!("Creating {} cache backend", cache_type);

    if let Some(cache) = try_cache_backend(cache_type).await {
        return Ok(cache);
    }

    if cache_type != "moka" {
        warn!("Falling back to memory cache");
        if let Some(cache) = try_cache_backend("moka").await {
            return Ok(cache);
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个管理员并打印一次性的 access token
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    let bootstrap = &AppConfig::get().bootstrap;

    let admin_request = CreateUserRequest {
        name: bootstrap.admin_name.clone(),
        email: bootstrap.admin_email.clone(),
        role: UserRole::Admin,
        department_id: None,
    };

    let admin = match storage.create_user(admin_request).await {
        Ok(user) => user,
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
            return;
        }
    };

    info!(
        "Default admin account created successfully (ID: {}, email: {})",
        admin.id, admin.email
    );

    if !bootstrap.print_admin_token {
        return;
    }

    // 没有登录接口，首次启动时给出管理员 token 方便运维
    match JwtUtils::generate_access_token(admin.id, admin.role.as_str()) {
        Ok(token) => {
            warn!("==========================================================");
            warn!("  BOOTSTRAP ADMIN ACCESS TOKEN");
            warn!("  {}", token);
            warn!(
                "  Valid for {} minutes",
                AppConfig::get().jwt.access_token_expiry
            );
            warn!("==========================================================");
        }
        Err(e) => warn!("Failed to issue bootstrap admin token: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和默认数据
pub async fn prepare_server_startup() -> StartupContext {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    info!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    // 创建缓存实例
    let cache = create_cache().await.expect("Failed to create cache");
    info!("Cache backend initialized");

    StartupContext { storage, cache }
}
