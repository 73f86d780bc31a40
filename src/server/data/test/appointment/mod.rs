use crate::{
    model::appointment::AppointmentStatus,
    server::{
        data::appointment::AppointmentRepository,
        model::appointment::{AppointmentChanges, AppointmentFilter, CreateAppointmentParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
