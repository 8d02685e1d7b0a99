//! 工单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: String,
    pub priority: String,
    pub department_id: i64,
    pub created_by: i64,
    pub assigned_to: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_ticket(self) -> crate::models::tickets::entities::Ticket {
        use crate::models::tickets::entities::{Ticket, TicketPriority, TicketStatus};

        Ticket {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status.parse().unwrap_or(TicketStatus::Open),
            priority: self.priority.parse().unwrap_or(TicketPriority::Medium),
            department_id: self.department_id,
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
