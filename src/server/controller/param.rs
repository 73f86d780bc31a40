use serde::Deserialize;
use utoipa::IntoParams;

use crate::model::appointment::AppointmentStatus;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StaffFilterParam {
    /// Only services offered by this manicure.
    pub staff_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusFilterParam {
    /// Only appointments with this status.
    pub status: Option<AppointmentStatus>,
}
