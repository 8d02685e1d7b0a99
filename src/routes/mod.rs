pub mod departments;

pub mod notifications;

pub mod navigation;

pub mod system;

pub mod not_found;

pub use departments::configure_department_routes;
pub use navigation::configure_navigation_routes;
pub use not_found::route_not_found;
pub use notifications::configure_notification_routes;
pub use system::configure_system_routes;

use actix_web::{Route, web};

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::users::entities::UserRole;

// 中间件按路由挂载，方法不匹配的请求不会经过认证，直接落到 404
// actix 中后注册的 wrap 先执行，所以 RequireJWT 总是最后 wrap

/// authenticate
pub(crate) fn authenticated(route: Route) -> Route {
    route.wrap(RequireJWT)
}

/// authenticate → requireAdmin
pub(crate) fn admin_only(route: Route) -> Route {
    route
        .wrap(RequireRole::new_any(UserRole::admin_roles()))
        .wrap(RequireJWT)
}

/// authenticate → requireAgent
pub(crate) fn agents_only(route: Route) -> Route {
    route
        .wrap(RequireRole::new_any(UserRole::agent_roles()))
        .wrap(RequireJWT)
}

/// authenticate → requireEmployee
pub(crate) fn employees(route: Route) -> Route {
    route
        .wrap(RequireRole::new_any(UserRole::all_roles()))
        .wrap(RequireJWT)
}

/// 资源路径匹配但方法不匹配时也返回 404
pub(crate) fn resource(path: &str) -> actix_web::Resource {
    web::resource(path).default_service(web::to(route_not_found))
}

/// 注册所有 /api/v1 路由
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_department_routes)
        .configure(configure_notification_routes)
        .configure(configure_navigation_routes);
}
