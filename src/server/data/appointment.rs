//! Appointment data repository.
//!
//! Besides plain CRUD this repository owns the compare-and-swap write used for
//! optimistic concurrency: an update only lands when the stored version still matches
//! the version the caller read.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    add_on::add_ons_into_entity,
    appointment::{Appointment, AppointmentChanges, AppointmentFilter, CreateAppointmentParam},
};

/// Version assigned to newly created appointments.
pub const INITIAL_VERSION: i32 = 1;

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new appointment at version 1.
    ///
    /// # Arguments
    /// - `param` - Booking details; referenced rows must already exist
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The stored appointment
    /// - `Err(DbErr)` - Insert failed, including foreign key violations
    pub async fn create(&self, param: CreateAppointmentParam) -> Result<Appointment, DbErr> {
        let entity = entity::appointment::ActiveModel {
            service_id: ActiveValue::Set(param.service_id),
            estimated_duration: ActiveValue::Set(param.estimated_duration),
            scheduled_at: ActiveValue::Set(param.scheduled_at),
            client_id: ActiveValue::Set(param.client_id),
            staff_id: ActiveValue::Set(param.staff_id),
            status: ActiveValue::Set(param.status.into()),
            add_ons: ActiveValue::Set(add_ons_into_entity(param.add_ons)),
            version: ActiveValue::Set(INITIAL_VERSION),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    /// Finds an appointment by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Appointment found
    /// - `Ok(None)` - No appointment with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Lists appointments matching `filter`, earliest first.
    pub async fn find_all(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, DbErr> {
        let mut query = entity::prelude::Appointment::find();

        if let Some(client_id) = filter.client_id {
            query = query.filter(entity::appointment::Column::ClientId.eq(client_id));
        }
        if let Some(staff_id) = filter.staff_id {
            query = query.filter(entity::appointment::Column::StaffId.eq(staff_id));
        }
        if let Some(status) = filter.status {
            let status: entity::sea_orm_active_enums::AppointmentStatus = status.into();
            query = query.filter(entity::appointment::Column::Status.eq(status));
        }

        let entities = query
            .order_by_asc(entity::appointment::Column::ScheduledAt)
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Applies `changes` only if the stored version still equals `expected_version`.
    ///
    /// The write is a single `UPDATE ... WHERE id = ? AND version = ?` which also bumps
    /// the version, so two writers that read the same version cannot both succeed.
    ///
    /// # Arguments
    /// - `id` - Appointment ID
    /// - `expected_version` - Version the caller read before deciding on the change
    /// - `changes` - Fields to overwrite; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Update applied; the returned record carries the new version
    /// - `Ok(None)` - No row matched: the appointment is gone or its version moved on
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_if_version(
        &self,
        id: i32,
        expected_version: i32,
        changes: AppointmentChanges,
    ) -> Result<Option<Appointment>, DbErr> {
        let mut active_model = entity::appointment::ActiveModel {
            version: ActiveValue::Set(expected_version + 1),
            ..Default::default()
        };

        if let Some(service_id) = changes.service_id {
            active_model.service_id = ActiveValue::Set(service_id);
        }
        if let Some(estimated_duration) = changes.estimated_duration {
            active_model.estimated_duration = ActiveValue::Set(estimated_duration);
        }
        if let Some(scheduled_at) = changes.scheduled_at {
            active_model.scheduled_at = ActiveValue::Set(scheduled_at);
        }
        if let Some(client_id) = changes.client_id {
            active_model.client_id = ActiveValue::Set(client_id);
        }
        if let Some(staff_id) = changes.staff_id {
            active_model.staff_id = ActiveValue::Set(staff_id);
        }
        if let Some(status) = changes.status {
            active_model.status = ActiveValue::Set(status.into());
        }
        if let Some(add_ons) = changes.add_ons {
            active_model.add_ons = ActiveValue::Set(add_ons_into_entity(add_ons));
        }

        let result = entity::prelude::Appointment::update_many()
            .set(active_model)
            .filter(entity::appointment::Column::Id.eq(id))
            .filter(entity::appointment::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Deletes an appointment.
    ///
    /// # Returns
    /// - `Ok(true)` - Appointment deleted
    /// - `Ok(false)` - No appointment with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
