//! 通知实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub ticket_id: Option<i64>,
    pub is_read: bool,
    pub read_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_notification(self) -> crate::models::notifications::entities::Notification {
        use crate::models::notifications::entities::{Notification, NotificationType};

        Notification {
            id: self.id,
            user_id: self.user_id,
            notification_type: self
                .notification_type
                .parse()
                .unwrap_or(NotificationType::System),
            title: self.title,
            message: self.message,
            ticket_id: self.ticket_id,
            is_read: self.is_read,
            read_at: self.read_at.map(super::timestamp_to_datetime),
            created_at: super::timestamp_to_datetime(self.created_at),
        }
    }
}
