//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into `*Param`
//! types, call a service and convert the resulting domain model back into a DTO.

pub mod appointment;
pub mod auth;
pub mod catalog;
pub mod notification;
pub mod param;
pub mod salon;
pub mod user;
