use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Entity as Users};
use crate::errors::{HelpdeskError, Result};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set, SqlErr};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email.trim().to_lowercase()),
            role: Set(req.role.to_string()),
            department_id: Set(req.department_id),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                HelpdeskError::conflict("用户邮箱已存在")
            } else {
                HelpdeskError::database_operation(format!("创建用户失败: {e}"))
            }
        })?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| HelpdeskError::database_operation(format!("统计用户数量失败: {e}")))
    }
}
