//! SeaORM entity models for the salon database.

pub mod prelude;

pub mod appointment;
pub mod json;
pub mod salon_info;
pub mod salon_service;
pub mod sea_orm_active_enums;
pub mod user;
