use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::warn;

use crate::middlewares::RequireJWT;
use crate::models::navigation::requests::NavigationParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::navigation::build_navigation;
use crate::storage::Storage;

pub struct NavigationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NavigationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 当前用户的侧边栏导航
    pub async fn get_navigation(
        &self,
        request: &HttpRequest,
        query: NavigationParams,
    ) -> ActixResult<HttpResponse> {
        let Some(user) = RequireJWT::extract_user_claims(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        };

        // 未读数查询失败时不影响导航本身
        let unread = match self
            .get_storage(request)
            .get_unread_notification_count(user.id)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                warn!("Failed to count unread notifications for {}: {}", user.id, e);
                0
            }
        };

        let path = query.path.unwrap_or_else(|| "/".to_string());
        let navigation = build_navigation(Some(&user), unread, &path);

        Ok(HttpResponse::Ok().json(ApiResponse::success(
            navigation,
            "Navigation retrieved successfully",
        )))
    }
}
