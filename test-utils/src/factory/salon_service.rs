//! Salon service factory for creating catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::json::{AddOn, AddOnList};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test catalog entries.
///
/// # Example
///
/// ```rust,ignore
/// let service = SalonServiceFactory::new(&db)
///     .name("Gel nails")
///     .price(80.0)
///     .staff_id(staff.id)
///     .build()
///     .await?;
/// ```
pub struct SalonServiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    price: f64,
    duration: String,
    staff_id: Option<i32>,
    add_ons: Vec<AddOn>,
}

impl<'a> SalonServiceFactory<'a> {
    /// Creates a new SalonServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"`
    /// - price: `50.0`
    /// - duration: `"1h"`
    /// - no owner, no add-ons
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Service {}", id),
            description: None,
            price: 50.0,
            duration: "1h".to_string(),
            staff_id: None,
            add_ons: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn staff_id(mut self, staff_id: i32) -> Self {
        self.staff_id = Some(staff_id);
        self
    }

    pub fn add_on(mut self, name: impl Into<String>, price: f64) -> Self {
        self.add_ons.push(AddOn {
            name: name.into(),
            price,
            per_unit: false,
            quantity: 1,
        });
        self
    }

    /// Builds and inserts the salon service entity into the database.
    pub async fn build(self) -> Result<entity::salon_service::Model, DbErr> {
        entity::salon_service::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            duration: ActiveValue::Set(self.duration),
            staff_id: ActiveValue::Set(self.staff_id),
            add_ons: ActiveValue::Set(AddOnList(self.add_ons)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog entry with default values, optionally owned by a manicure.
pub async fn create_salon_service(
    db: &DatabaseConnection,
    staff_id: Option<i32>,
) -> Result<entity::salon_service::Model, DbErr> {
    let factory = SalonServiceFactory::new(db);
    match staff_id {
        Some(staff_id) => factory.staff_id(staff_id).build().await,
        None => factory.build().await,
    }
}
