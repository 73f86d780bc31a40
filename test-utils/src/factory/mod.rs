//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand for
//! quick default creation. Factories do not create their dependencies; use the
//! `helpers` module when a test needs a full appointment graph.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::create_client(&db).await?;
//! let staff = factory::create_manicure(&db).await?;
//! let service = factory::create_salon_service(&db, Some(staff.id)).await?;
//! let appointment = factory::create_appointment(&db, service.id, client.id, staff.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::AppointmentStatus;
//! use test_utils::factory::appointment::AppointmentFactory;
//!
//! let cancelled = AppointmentFactory::new(&db, service.id, client.id, staff.id)
//!     .status(AppointmentStatus::Cancelled)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Clients, manicures and admins
//! - `salon_service` - Catalog entries
//! - `appointment` - Bookings
//! - `salon_info` - The salon metadata row
//! - `helpers` - Unique id generation and dependency graphs

pub mod appointment;
pub mod helpers;
pub mod salon_info;
pub mod salon_service;
pub mod user;

pub use appointment::create_appointment;
pub use salon_service::create_salon_service;
pub use user::{create_admin, create_client, create_manicure};
