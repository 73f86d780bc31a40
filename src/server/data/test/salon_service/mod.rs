use crate::server::{
    data::salon_service::SalonServiceRepository,
    model::{
        add_on::AddOn,
        salon_service::{CreateSalonServiceParam, UpdateSalonServiceParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_all;
