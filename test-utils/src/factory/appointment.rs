//! Appointment factory for creating bookings.

use chrono::{DateTime, Duration, Utc};
use entity::{
    json::{AddOn, AddOnList},
    sea_orm_active_enums::AppointmentStatus,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments.
///
/// The referenced service, client and staff rows must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let appointment = AppointmentFactory::new(&db, service.id, client.id, staff.id)
///     .status(AppointmentStatus::Cancelled)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    service_id: i32,
    client_id: i32,
    staff_id: i32,
    estimated_duration: String,
    scheduled_at: DateTime<Utc>,
    status: AppointmentStatus,
    add_ons: Vec<AddOn>,
    version: i32,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - estimated_duration: `"1h"`
    /// - scheduled_at: one day from now
    /// - status: `Pending`
    /// - version: `1`
    pub fn new(db: &'a DatabaseConnection, service_id: i32, client_id: i32, staff_id: i32) -> Self {
        Self {
            db,
            service_id,
            client_id,
            staff_id,
            estimated_duration: "1h".to_string(),
            scheduled_at: Utc::now() + Duration::days(1),
            status: AppointmentStatus::Pending,
            add_ons: Vec::new(),
            version: 1,
        }
    }

    pub fn estimated_duration(mut self, estimated_duration: impl Into<String>) -> Self {
        self.estimated_duration = estimated_duration.into();
        self
    }

    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn add_on(mut self, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        self.add_ons.push(AddOn {
            name: name.into(),
            price,
            per_unit: quantity > 1,
            quantity,
        });
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            id: ActiveValue::NotSet,
            service_id: ActiveValue::Set(self.service_id),
            estimated_duration: ActiveValue::Set(self.estimated_duration),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            client_id: ActiveValue::Set(self.client_id),
            staff_id: ActiveValue::Set(self.staff_id),
            status: ActiveValue::Set(self.status),
            add_ons: ActiveValue::Set(AddOnList(self.add_ons)),
            version: ActiveValue::Set(self.version),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appointment with default values.
pub async fn create_appointment(
    db: &DatabaseConnection,
    service_id: i32,
    client_id: i32,
    staff_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, service_id, client_id, staff_id)
        .build()
        .await
}
