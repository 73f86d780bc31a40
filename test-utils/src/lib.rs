//! Salon Test Utils
//!
//! Shared testing utilities for the salon backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories that insert entities with sensible
//! defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables a test needs
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories (`create_client`, `create_appointment`, ...)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_appointment() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (client, staff, service, appointment) =
//!         factory::helpers::create_appointment_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
