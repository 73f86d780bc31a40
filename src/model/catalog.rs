use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::appointment::AddOnDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalonServiceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration: String,
    pub staff_id: Option<i32>,
    pub add_ons: Vec<AddOnDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSalonServiceDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub duration: String,
    /// Defaults to the creating manicure.
    #[serde(default)]
    pub staff_id: Option<i32>,
    #[serde(default)]
    pub add_ons: Vec<AddOnDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSalonServiceDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub staff_id: Option<i32>,
    pub add_ons: Option<Vec<AddOnDto>>,
}
