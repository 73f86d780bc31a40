use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::appointment::AppointmentStatus;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned with `409 Conflict` when an appointment update is refused.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictDto {
    pub error: String,
    /// Machine-readable conflict code, e.g. `AGENDAMENTO_JA_CANCELADO`.
    pub code: String,
    pub current_status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<i32>,
}
