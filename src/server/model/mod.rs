//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so SeaORM entities never reach
//! services or controllers.

pub mod add_on;
pub mod appointment;
pub mod salon;
pub mod salon_service;
pub mod user;
