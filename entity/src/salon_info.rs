use sea_orm::entity::prelude::*;

use super::json::GalleryList;

/// Salon-wide contact details. The table holds a single row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "salon_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub opening_hours: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub galleries: GalleryList,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
