//! Appointment domain models and parameters.
//!
//! Provides the domain model for booked services along with the parameter types for
//! creating, partially updating and listing appointments. Listing filters are derived
//! from the requesting user's role so that clients and manicures only ever see their
//! own appointments.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        appointment::{
            AppointmentDto, AppointmentStatus, CreateAppointmentDto, UpdateAppointmentDto,
        },
        user::UserRole,
    },
    server::model::{
        add_on::{add_ons_from_entity, AddOn},
        user::User,
    },
};

impl From<entity::sea_orm_active_enums::AppointmentStatus> for AppointmentStatus {
    fn from(status: entity::sea_orm_active_enums::AppointmentStatus) -> Self {
        use entity::sea_orm_active_enums::AppointmentStatus as Stored;

        match status {
            Stored::Pending => Self::Pending,
            Stored::Confirmed => Self::Confirmed,
            Stored::Cancelled => Self::Cancelled,
            Stored::Completed => Self::Completed,
        }
    }
}

impl From<AppointmentStatus> for entity::sea_orm_active_enums::AppointmentStatus {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => Self::Pending,
            AppointmentStatus::Confirmed => Self::Confirmed,
            AppointmentStatus::Cancelled => Self::Cancelled,
            AppointmentStatus::Completed => Self::Completed,
        }
    }
}

/// A booked service instance linking a client, a manicure and a service.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    /// Unique identifier assigned by the database.
    pub id: i32,
    /// Catalog service being booked.
    pub service_id: i32,
    /// Free-text duration label, e.g. "1h30".
    pub estimated_duration: String,
    pub scheduled_at: DateTime<Utc>,
    pub client_id: i32,
    /// Manicure performing the service.
    pub staff_id: i32,
    pub status: AppointmentStatus,
    pub add_ons: Vec<AddOn>,
    /// Optimistic concurrency counter, incremented on every successful update.
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            service_id: entity.service_id,
            estimated_duration: entity.estimated_duration,
            scheduled_at: entity.scheduled_at,
            client_id: entity.client_id,
            staff_id: entity.staff_id,
            status: entity.status.into(),
            add_ons: add_ons_from_entity(entity.add_ons),
            version: entity.version,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO at the controller boundary.
    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            service_id: self.service_id,
            estimated_duration: self.estimated_duration,
            scheduled_at: self.scheduled_at,
            client_id: self.client_id,
            staff_id: self.staff_id,
            status: self.status,
            add_ons: self.add_ons.into_iter().map(AddOn::into_dto).collect(),
            version: self.version,
            created_at: self.created_at,
        }
    }

    /// Whether `user` may read or modify this appointment.
    ///
    /// Admins see everything, manicures see the appointments assigned to them and
    /// clients see their own bookings.
    pub fn is_visible_to(&self, user: &User) -> bool {
        match user.role {
            UserRole::Admin => true,
            UserRole::Manicure => self.staff_id == user.id,
            UserRole::Client => self.client_id == user.id,
        }
    }
}

/// Parameters for booking a new appointment.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParam {
    pub service_id: i32,
    pub estimated_duration: String,
    pub scheduled_at: DateTime<Utc>,
    pub client_id: i32,
    pub staff_id: i32,
    pub status: AppointmentStatus,
    pub add_ons: Vec<AddOn>,
}

impl CreateAppointmentParam {
    /// Converts the request body, booking for `client_id` when the body names no client.
    pub fn from_dto(client_id: i32, dto: CreateAppointmentDto) -> Self {
        Self {
            service_id: dto.service_id,
            estimated_duration: dto.estimated_duration,
            scheduled_at: dto.scheduled_at,
            client_id: dto.client_id.unwrap_or(client_id),
            staff_id: dto.staff_id,
            status: dto.status.unwrap_or_default(),
            add_ons: dto.add_ons.into_iter().map(AddOn::from_dto).collect(),
        }
    }
}

/// Partial appointment update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentChanges {
    pub service_id: Option<i32>,
    pub estimated_duration: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub client_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub status: Option<AppointmentStatus>,
    pub add_ons: Option<Vec<AddOn>>,
}

/// Update request: the changes plus the version the caller based them on, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAppointmentParam {
    pub changes: AppointmentChanges,
    pub expected_version: Option<i32>,
}

impl UpdateAppointmentParam {
    pub fn from_dto(dto: UpdateAppointmentDto) -> Self {
        Self {
            changes: AppointmentChanges {
                service_id: dto.service_id,
                estimated_duration: dto.estimated_duration,
                scheduled_at: dto.scheduled_at,
                client_id: dto.client_id,
                staff_id: dto.staff_id,
                status: dto.status,
                add_ons: dto
                    .add_ons
                    .map(|add_ons| add_ons.into_iter().map(AddOn::from_dto).collect()),
            },
            expected_version: dto.version,
        }
    }
}

/// Filter for listing appointments. Unset fields do not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub client_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentFilter {
    /// Restricts a listing to what `user` is allowed to see.
    pub fn for_user(user: &User, status: Option<AppointmentStatus>) -> Self {
        match user.role {
            UserRole::Admin => Self {
                status,
                ..Default::default()
            },
            UserRole::Manicure => Self {
                staff_id: Some(user.id),
                status,
                ..Default::default()
            },
            UserRole::Client => Self {
                client_id: Some(user.id),
                status,
                ..Default::default()
            },
        }
    }
}
