use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AppointmentStatus {
    #[sea_orm(string_value = "pendente")]
    Pending,
    #[sea_orm(string_value = "confirmado")]
    Confirmed,
    #[sea_orm(string_value = "cancelado")]
    Cancelled,
    #[sea_orm(string_value = "concluido")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "cliente")]
    Client,
    #[sea_orm(string_value = "manicure")]
    Manicure,
    #[sea_orm(string_value = "admin")]
    Admin,
}
