//! Appointment update-conflict check.
//!
//! Pure decisions taken before an appointment update is written. The only status rule
//! is that a cancelled appointment cannot be confirmed; every other transition, including
//! reopening a completed appointment or repeating the current status, is allowed.

use crate::{
    model::appointment::AppointmentStatus,
    server::{error::appointment::AppointmentError, model::appointment::Appointment},
};

/// Decides whether moving from `current` to `proposed` is allowed.
///
/// `None` means the update does not touch the status and is always allowed.
///
/// # Returns
/// - `Ok(())` - The update may proceed
/// - `Err(AppointmentError::AlreadyCancelled)` - Confirming a cancelled appointment
pub fn check_status_change(
    current: AppointmentStatus,
    proposed: Option<AppointmentStatus>,
) -> Result<(), AppointmentError> {
    match (current, proposed) {
        (AppointmentStatus::Cancelled, Some(AppointmentStatus::Confirmed)) => {
            Err(AppointmentError::AlreadyCancelled {
                current_status: current,
            })
        }
        _ => Ok(()),
    }
}

/// Rejects an update based on a version other than the stored one.
///
/// Callers that send no version skip this check; their write is still guarded by the
/// compare-and-swap in the repository.
pub fn check_version(
    current: &Appointment,
    expected_version: Option<i32>,
) -> Result<(), AppointmentError> {
    match expected_version {
        Some(expected) if expected != current.version => {
            Err(AppointmentError::ConcurrentModification {
                current_status: current.status,
                current_version: current.version,
            })
        }
        _ => Ok(()),
    }
}
