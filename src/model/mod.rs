//! Request and response DTOs exchanged over the JSON API.

pub mod api;
pub mod appointment;
pub mod catalog;
pub mod notification;
pub mod salon;
pub mod user;
