use super::*;

/// Tests that listings are scoped by role.
///
/// Verifies that clients see only their bookings, manicures only the bookings assigned
/// to them, and admins see everything.
///
/// Expected: 1 for each client and manicure, 2 for the admin
#[tokio::test]
async fn scopes_listing_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_client = factory::create_client(db).await?;
    let second_client = factory::create_client(db).await?;
    let first_staff = factory::create_manicure(db).await?;
    let second_staff = factory::create_manicure(db).await?;
    let catalog_entry = factory::create_salon_service(db, None).await?;

    factory::create_appointment(db, catalog_entry.id, first_client.id, first_staff.id).await?;
    factory::create_appointment(db, catalog_entry.id, second_client.id, second_staff.id).await?;

    let service = AppointmentService::new(db);

    let client_view = service
        .list(&User::from_entity(first_client.clone()), None)
        .await?;
    assert_eq!(client_view.len(), 1);
    assert_eq!(client_view[0].client_id, first_client.id);

    let staff_view = service
        .list(&User::from_entity(second_staff.clone()), None)
        .await?;
    assert_eq!(staff_view.len(), 1);
    assert_eq!(staff_view[0].staff_id, second_staff.id);

    let admin_view = service.list(&admin(db).await, None).await?;
    assert_eq!(admin_view.len(), 2);

    Ok(())
}

/// Tests filtering the listing by status.
///
/// Expected: only the confirmed appointment
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let staff = factory::create_manicure(db).await?;
    let catalog_entry = factory::create_salon_service(db, Some(staff.id)).await?;

    factory::create_appointment(db, catalog_entry.id, client.id, staff.id).await?;
    let confirmed = AppointmentFactory::new(db, catalog_entry.id, client.id, staff.id)
        .status(entity::sea_orm_active_enums::AppointmentStatus::Confirmed)
        .build()
        .await?;

    let result = AppointmentService::new(db)
        .list(&admin(db).await, Some(AppointmentStatus::Confirmed))
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, confirmed.id);

    Ok(())
}
