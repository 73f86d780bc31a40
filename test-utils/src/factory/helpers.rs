//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across all factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending appointment with every entity it references.
///
/// Creates, in order:
/// 1. Client user
/// 2. Manicure user
/// 3. Salon service owned by the manicure
/// 4. Appointment linking the three
///
/// # Returns
/// - `Ok((client, staff, service, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::salon_service::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let client = crate::factory::user::create_client(db).await?;
    let staff = crate::factory::user::create_manicure(db).await?;
    let service = crate::factory::salon_service::create_salon_service(db, Some(staff.id)).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, service.id, client.id, staff.id)
            .await?;

    Ok((client, staff, service, appointment))
}
