use sea_orm::entity::prelude::*;

use super::{json::AddOnList, sea_orm_active_enums::AppointmentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_id: i32,
    pub estimated_duration: String,
    pub scheduled_at: DateTimeUtc,
    pub client_id: i32,
    pub staff_id: i32,
    pub status: AppointmentStatus,
    #[sea_orm(column_type = "Json")]
    pub add_ons: AddOnList,
    pub version: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::salon_service::Entity",
        from = "Column::ServiceId",
        to = "super::salon_service::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SalonService,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ClientId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StaffId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Staff,
}

impl Related<super::salon_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalonService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
