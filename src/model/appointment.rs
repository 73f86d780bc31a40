use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Lifecycle status of an appointment.
///
/// Serialized with the salon's Portuguese labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "cancelado")]
    Cancelled,
    #[serde(rename = "concluido")]
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pendente",
            Self::Confirmed => "confirmado",
            Self::Cancelled => "cancelado",
            Self::Completed => "concluido",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddOnDto {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub per_unit: bool,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: i32,
    pub service_id: i32,
    pub estimated_duration: String,
    pub scheduled_at: DateTime<Utc>,
    pub client_id: i32,
    pub staff_id: i32,
    pub status: AppointmentStatus,
    pub add_ons: Vec<AddOnDto>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAppointmentDto {
    pub service_id: i32,
    pub estimated_duration: String,
    pub scheduled_at: DateTime<Utc>,
    /// Defaults to the logged in user when omitted.
    #[serde(default)]
    pub client_id: Option<i32>,
    pub staff_id: i32,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub add_ons: Vec<AddOnDto>,
}

/// Partial update of an appointment. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAppointmentDto {
    pub service_id: Option<i32>,
    pub estimated_duration: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub client_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub status: Option<AppointmentStatus>,
    pub add_ons: Option<Vec<AddOnDto>>,
    /// Version the caller last saw; the update is refused if the stored version differs.
    pub version: Option<i32>,
}
