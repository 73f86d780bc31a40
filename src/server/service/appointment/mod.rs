//! Appointment service.
//!
//! Orchestrates bookings between controllers and the repositories. Besides reference
//! validation and role scoping, this is where the update flow lives: read the stored
//! record, run the conflict check, then write with a compare-and-swap on the version so
//! that a concurrent update between the read and the write is detected instead of lost.

pub mod conflict;

use sea_orm::DatabaseConnection;

use crate::{
    model::{appointment::AppointmentStatus, user::UserRole},
    server::{
        data::{
            appointment::AppointmentRepository, salon_service::SalonServiceRepository,
            user::UserRepository,
        },
        error::{appointment::AppointmentError, auth::AuthError, AppError},
        model::{
            appointment::{
                Appointment, AppointmentFilter, CreateAppointmentParam, UpdateAppointmentParam,
            },
            user::User,
        },
        util::validate::{require_field, validate_price},
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a new appointment on behalf of `actor`.
    ///
    /// Clients may only book for themselves; staff may book for any client.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Stored appointment at version 1
    /// - `Err(AppError::ValidationErr)` - Blank duration or invalid add-on price
    /// - `Err(AppError::AuthErr)` - A client tried to book for someone else
    /// - `Err(AppError::BadRequest)` - Service, client or manicure does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        actor: &User,
        mut param: CreateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        param.estimated_duration = require_field("estimatedDuration", &param.estimated_duration)?;
        for add_on in &param.add_ons {
            validate_price(add_on.price)?;
        }

        if actor.role == UserRole::Client && param.client_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("client attempted to book for user {}", param.client_id),
            )
            .into());
        }

        self.validate_references(
            Some(param.service_id),
            Some(param.client_id),
            Some(param.staff_id),
        )
        .await?;

        let appointment = AppointmentRepository::new(self.db).create(param).await?;

        tracing::info!(
            appointment_id = appointment.id,
            client_id = appointment.client_id,
            staff_id = appointment.staff_id,
            "Appointment created"
        );

        Ok(appointment)
    }

    /// Gets an appointment visible to `actor`.
    ///
    /// Appointments outside the actor's scope are reported as not found.
    pub async fn get(&self, actor: &User, id: i32) -> Result<Appointment, AppError> {
        match AppointmentRepository::new(self.db).find_by_id(id).await? {
            Some(appointment) if appointment.is_visible_to(actor) => Ok(appointment),
            _ => Err(not_found(id)),
        }
    }

    /// Lists the appointments visible to `actor`, earliest first.
    pub async fn list(
        &self,
        actor: &User,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>, AppError> {
        let filter = AppointmentFilter::for_user(actor, status);
        let appointments = AppointmentRepository::new(self.db).find_all(filter).await?;

        Ok(appointments)
    }

    /// Applies a partial update after the conflict check.
    ///
    /// Steps:
    /// 1. Read the stored appointment; unknown or invisible IDs are `NotFound`
    /// 2. Reject a caller-supplied version that differs from the stored one
    /// 3. Reject confirming an appointment whose stored status is cancelled
    /// 4. Write only if the stored version is still the one read in step 1
    ///
    /// Refused updates never mutate the record.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Updated appointment with its version incremented
    /// - `Err(AppError::NotFound)` - No such appointment, or it vanished before the write
    /// - `Err(AppError::AppointmentErr)` - Status conflict or concurrent modification
    /// - `Err(AppError::ValidationErr)` - Blank duration or invalid add-on price
    /// - `Err(AppError::BadRequest)` - A changed reference does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        mut param: UpdateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let current = self.get(actor, id).await?;

        if let Some(duration) = &param.changes.estimated_duration {
            param.changes.estimated_duration = Some(require_field("estimatedDuration", duration)?);
        }
        for add_on in param.changes.add_ons.iter().flatten() {
            validate_price(add_on.price)?;
        }

        conflict::check_version(&current, param.expected_version)?;
        conflict::check_status_change(current.status, param.changes.status)?;

        if actor.role == UserRole::Client
            && param
                .changes
                .client_id
                .is_some_and(|client_id| client_id != actor.id)
        {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("client attempted to move appointment {} to another client", id),
            )
            .into());
        }

        self.validate_references(
            param.changes.service_id,
            param.changes.client_id,
            param.changes.staff_id,
        )
        .await?;

        if let Some(updated) = repo
            .update_if_version(id, current.version, param.changes)
            .await?
        {
            tracing::info!(
                appointment_id = id,
                status = %updated.status,
                version = updated.version,
                "Appointment updated"
            );

            return Ok(updated);
        }

        match repo.find_by_id(id).await? {
            None => Err(not_found(id)),
            Some(latest) => {
                tracing::warn!(
                    appointment_id = id,
                    read_version = current.version,
                    stored_version = latest.version,
                    "Appointment changed between read and write"
                );

                Err(AppointmentError::ConcurrentModification {
                    current_status: latest.status,
                    current_version: latest.version,
                }
                .into())
            }
        }
    }

    /// Deletes an appointment.
    ///
    /// # Returns
    /// - `Ok(())` - Appointment deleted
    /// - `Err(AppError::NotFound)` - No such appointment
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AppointmentRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(appointment_id = id, "Appointment deleted");

        Ok(())
    }

    /// Checks that every referenced row exists and that the manicure is staff.
    async fn validate_references(
        &self,
        service_id: Option<i32>,
        client_id: Option<i32>,
        staff_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(service_id) = service_id {
            if SalonServiceRepository::new(self.db)
                .find_by_id(service_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Service {} does not exist",
                    service_id
                )));
            }
        }

        let user_repo = UserRepository::new(self.db);

        if let Some(client_id) = client_id {
            if user_repo.find_by_id(client_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Client {} does not exist",
                    client_id
                )));
            }
        }

        if let Some(staff_id) = staff_id {
            match user_repo.find_by_id(staff_id).await? {
                Some(staff) if staff.is_staff() => {}
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Manicure {} does not exist",
                        staff_id
                    )))
                }
            }
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Appointment {} not found", id))
}
