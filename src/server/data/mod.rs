//! Database repository layer for all domain entities.
//!
//! Each repository borrows the database connection, performs CRUD operations with SeaORM
//! entity models and converts results into domain models before returning them. No
//! business rules live here; access control and conflict checks belong to the services.

pub mod appointment;
pub mod salon_info;
pub mod salon_service;
pub mod user;

#[cfg(test)]
mod test;
