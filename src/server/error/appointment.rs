use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ConflictDto, appointment::AppointmentStatus};

/// Conflict code sent when confirming an appointment that is already cancelled.
pub const CODE_ALREADY_CANCELLED: &str = "AGENDAMENTO_JA_CANCELADO";

/// Conflict code sent when the appointment changed since the caller read it.
pub const CODE_CONCURRENT_MODIFICATION: &str = "AGENDAMENTO_MODIFICADO";

/// Reasons an appointment update is refused without mutating the record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppointmentError {
    /// The update tries to confirm an appointment whose stored status is cancelled.
    #[error("Appointment was cancelled and can no longer be confirmed")]
    AlreadyCancelled { current_status: AppointmentStatus },

    /// The stored version no longer matches the version the update was based on.
    #[error("Appointment was modified by another request (stored version {current_version})")]
    ConcurrentModification {
        current_status: AppointmentStatus,
        current_version: i32,
    },
}

impl AppointmentError {
    /// Machine-readable code included in the conflict body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyCancelled { .. } => CODE_ALREADY_CANCELLED,
            Self::ConcurrentModification { .. } => CODE_CONCURRENT_MODIFICATION,
        }
    }

    pub fn current_status(&self) -> AppointmentStatus {
        match self {
            Self::AlreadyCancelled { current_status }
            | Self::ConcurrentModification { current_status, .. } => *current_status,
        }
    }
}

/// Every appointment error is a `409 Conflict` carrying the stored status.
impl IntoResponse for AppointmentError {
    fn into_response(self) -> Response {
        let current_version = match &self {
            Self::ConcurrentModification {
                current_version, ..
            } => Some(*current_version),
            Self::AlreadyCancelled { .. } => None,
        };

        (
            StatusCode::CONFLICT,
            Json(ConflictDto {
                error: self.to_string(),
                code: self.code().to_string(),
                current_status: self.current_status(),
                current_version,
            }),
        )
            .into_response()
    }
}
