//! Service catalog domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::catalog::{CreateSalonServiceDto, SalonServiceDto, UpdateSalonServiceDto},
    server::model::add_on::{add_ons_from_entity, AddOn},
};

/// A bookable service offered by the salon.
#[derive(Debug, Clone, PartialEq)]
pub struct SalonService {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration: String,
    /// Manicure offering the service, if any.
    pub staff_id: Option<i32>,
    pub add_ons: Vec<AddOn>,
    pub created_at: DateTime<Utc>,
}

impl SalonService {
    pub fn from_entity(entity: entity::salon_service::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            duration: entity.duration,
            staff_id: entity.staff_id,
            add_ons: add_ons_from_entity(entity.add_ons),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SalonServiceDto {
        SalonServiceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            staff_id: self.staff_id,
            add_ons: self.add_ons.into_iter().map(AddOn::into_dto).collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSalonServiceParam {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration: String,
    pub staff_id: Option<i32>,
    pub add_ons: Vec<AddOn>,
}

impl CreateSalonServiceParam {
    /// Converts the request body, falling back to `default_staff_id` as the owner.
    pub fn from_dto(default_staff_id: Option<i32>, dto: CreateSalonServiceDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            duration: dto.duration,
            staff_id: dto.staff_id.or(default_staff_id),
            add_ons: dto.add_ons.into_iter().map(AddOn::from_dto).collect(),
        }
    }
}

/// Partial catalog update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSalonServiceParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub staff_id: Option<i32>,
    pub add_ons: Option<Vec<AddOn>>,
}

impl UpdateSalonServiceParam {
    pub fn from_dto(dto: UpdateSalonServiceDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            duration: dto.duration,
            staff_id: dto.staff_id,
            add_ons: dto
                .add_ons
                .map(|add_ons| add_ons.into_iter().map(AddOn::from_dto).collect()),
        }
    }
}
