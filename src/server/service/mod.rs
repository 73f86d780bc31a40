//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Role scoping, validation and the appointment conflict rules
//! - **Orchestration**: Coordinating repository calls and outbound email or SMS
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod appointment;
pub mod catalog;
pub mod contact;
pub mod notification;
pub mod salon;
pub mod user;
pub mod verification;
