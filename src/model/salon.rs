use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhotoGalleryDto {
    pub name: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Salon metadata with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalonInfoDto {
    pub name: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub email: String,
    pub instagram: String,
    pub opening_hours: String,
    pub galleries: Vec<PhotoGalleryDto>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSalonInfoDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub opening_hours: Option<String>,
    pub galleries: Option<Vec<PhotoGalleryDto>>,
}
