//! Salon metadata domain model.
//!
//! Every stored field is optional. Converting to a DTO fills missing or blank fields
//! with defaults so clients always receive a complete record, even before an admin has
//! saved anything.

use chrono::{DateTime, Utc};

use crate::model::salon::{PhotoGalleryDto, SalonInfoDto, UpdateSalonInfoDto};

pub const DEFAULT_SALON_NAME: &str = "Salão de Beleza";
pub const DEFAULT_OPENING_HOURS: &str = "Segunda a sábado, das 9h às 19h";

/// Named set of photo URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoGallery {
    pub name: String,
    pub photos: Vec<String>,
}

impl PhotoGallery {
    pub fn from_entity(entity: entity::json::PhotoGallery) -> Self {
        Self {
            name: entity.name,
            photos: entity.photos,
        }
    }

    pub fn into_entity(self) -> entity::json::PhotoGallery {
        entity::json::PhotoGallery {
            name: self.name,
            photos: self.photos,
        }
    }

    pub fn from_dto(dto: PhotoGalleryDto) -> Self {
        Self {
            name: dto.name,
            photos: dto.photos,
        }
    }

    pub fn into_dto(self) -> PhotoGalleryDto {
        PhotoGalleryDto {
            name: self.name,
            photos: self.photos,
        }
    }
}

/// Salon metadata as stored, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalonInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub opening_hours: Option<String>,
    pub galleries: Vec<PhotoGallery>,
    /// `None` until the record has been saved once.
    pub updated_at: Option<DateTime<Utc>>,
}

impl SalonInfo {
    pub fn from_entity(entity: entity::salon_info::Model) -> Self {
        Self {
            name: entity.name,
            phone: entity.phone,
            whatsapp: entity.whatsapp,
            address: entity.address,
            email: entity.email,
            instagram: entity.instagram,
            opening_hours: entity.opening_hours,
            galleries: entity
                .galleries
                .0
                .into_iter()
                .map(PhotoGallery::from_entity)
                .collect(),
            updated_at: Some(entity.updated_at),
        }
    }

    /// Converts to a DTO, replacing missing or blank fields with defaults.
    pub fn into_dto(self) -> SalonInfoDto {
        SalonInfoDto {
            name: or_default(self.name, DEFAULT_SALON_NAME),
            phone: or_default(self.phone, ""),
            whatsapp: or_default(self.whatsapp, ""),
            address: or_default(self.address, ""),
            email: or_default(self.email, ""),
            instagram: or_default(self.instagram, ""),
            opening_hours: or_default(self.opening_hours, DEFAULT_OPENING_HOURS),
            galleries: self
                .galleries
                .into_iter()
                .map(PhotoGallery::into_dto)
                .collect(),
            updated_at: self.updated_at,
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Partial metadata update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSalonInfoParam {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub opening_hours: Option<String>,
    pub galleries: Option<Vec<PhotoGallery>>,
}

impl UpdateSalonInfoParam {
    pub fn from_dto(dto: UpdateSalonInfoDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            whatsapp: dto.whatsapp,
            address: dto.address,
            email: dto.email,
            instagram: dto.instagram,
            opening_hours: dto.opening_hours,
            galleries: dto
                .galleries
                .map(|galleries| galleries.into_iter().map(PhotoGallery::from_dto).collect()),
        }
    }
}
