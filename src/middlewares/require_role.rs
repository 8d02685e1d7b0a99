/*!
 * 基于角色的访问控制中间件
 *
 * 此中间件必须在 RequireJWT 中间件之后使用，用于验证用户是否具有特定角色权限。
 *
 * ## 使用方法
 *
 * actix 中后注册的 wrap 先执行，所以 `RequireRole` 要写在 `RequireJWT` 前面：
 *
 * ```rust,ignore
 * web::resource("/api/v1/departments")
 *     .route(
 *         web::post()
 *             .to(create_department)
 *             .wrap(RequireRole::new(&UserRole::Admin))
 *             .wrap(RequireJWT),
 *     );
 * ```
 *
 * 任一角色即可通过：
 *
 * ```rust,ignore
 * .wrap(RequireRole::new_any(UserRole::agent_roles()))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    users::entities::{User, UserRole},
};

use super::create_error_response;

#[derive(Clone, Debug)]
pub struct RequireRole {
    allowed_roles: Vec<UserRole>,
}

impl RequireRole {
    /// 只允许单一角色
    pub fn new(role: &UserRole) -> Self {
        Self {
            allowed_roles: vec![role.clone()],
        }
    }

    /// 允许列表中的任一角色
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed_roles: roles.iter().map(|r| (*r).clone()).collect(),
        }
    }

    pub fn permits(&self, role: &UserRole) -> bool {
        self.allowed_roles.contains(role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            policy: self.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    policy: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let policy = self.policy.clone();

        Box::pin(async move {
            let current = req
                .extensions()
                .get::<User>()
                .map(|user| (user.id, user.role.clone()));

            let Some((user_id, role)) = current else {
                info!("Role check failed: no authenticated user on {}", req.path());
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            if policy.permits(&role) {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            info!(
                "Access denied for user {} (role: {}). Allowed roles: {:?}",
                user_id, role, policy.allowed_roles
            );
            Ok(req.into_response(
                create_error_response(StatusCode::FORBIDDEN, ErrorCode::Forbidden, "Access denied.")
                    .map_into_right_body(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_role_policy() {
        let admin_only = RequireRole::new(&UserRole::Admin);
        assert!(admin_only.permits(&UserRole::Admin));
        assert!(!admin_only.permits(&UserRole::Agent));
        assert!(!admin_only.permits(&UserRole::Employee));
    }

    #[test]
    fn test_any_role_policy() {
        let agents = RequireRole::new_any(UserRole::agent_roles());
        assert!(agents.permits(&UserRole::Admin));
        assert!(agents.permits(&UserRole::Agent));
        assert!(!agents.permits(&UserRole::Employee));

        let everyone = RequireRole::new_any(UserRole::all_roles());
        assert!(UserRole::all_roles().iter().all(|role| everyone.permits(role)));
    }
}
