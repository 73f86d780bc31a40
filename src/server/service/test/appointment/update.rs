use super::*;
use entity::sea_orm_active_enums::AppointmentStatus as StoredStatus;
use test_utils::factory::helpers::create_appointment_with_dependencies;

/// Tests confirming an appointment that is already cancelled.
///
/// Verifies that the update is refused with the cancelled status and that the stored
/// record, version included, is left exactly as it was.
///
/// Expected: Err(AlreadyCancelled) and an unchanged record
#[tokio::test]
async fn refuses_to_confirm_cancelled_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let staff = factory::create_manicure(db).await?;
    let service = factory::create_salon_service(db, Some(staff.id)).await?;
    let cancelled = AppointmentFactory::new(db, service.id, client.id, staff.id)
        .status(StoredStatus::Cancelled)
        .build()
        .await?;
    let actor = admin(db).await;

    let service = AppointmentService::new(db);
    let result = service
        .update(&actor, cancelled.id, status_change(AppointmentStatus::Confirmed))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AppointmentErr(AppointmentError::AlreadyCancelled {
            current_status: AppointmentStatus::Cancelled
        }))
    ));

    let stored = service.get(&actor, cancelled.id).await?;
    assert_eq!(stored.status, AppointmentStatus::Cancelled);
    assert_eq!(stored.version, cancelled.version);

    Ok(())
}

/// Tests that the cancelled guard does not block other changes.
///
/// Verifies that a cancelled appointment can be rescheduled, completed or moved back
/// to pending, and that a pending appointment can be confirmed.
///
/// Expected: Ok for every transition other than cancelled to confirmed
#[tokio::test]
async fn allows_other_status_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let staff = factory::create_manicure(db).await?;
    let catalog_entry = factory::create_salon_service(db, Some(staff.id)).await?;
    let actor = admin(db).await;
    let service = AppointmentService::new(db);

    let cancelled = AppointmentFactory::new(db, catalog_entry.id, client.id, staff.id)
        .status(StoredStatus::Cancelled)
        .build()
        .await?;
    let rescheduled = service
        .update(
            &actor,
            cancelled.id,
            UpdateAppointmentParam {
                changes: AppointmentChanges {
                    scheduled_at: Some(Utc::now() + Duration::days(3)),
                    ..Default::default()
                },
                expected_version: None,
            },
        )
        .await?;
    assert_eq!(rescheduled.status, AppointmentStatus::Cancelled);

    let reopened = service
        .update(&actor, cancelled.id, status_change(AppointmentStatus::Pending))
        .await?;
    assert_eq!(reopened.status, AppointmentStatus::Pending);

    let pending = factory::create_appointment(db, catalog_entry.id, client.id, staff.id).await?;
    let confirmed = service
        .update(&actor, pending.id, status_change(AppointmentStatus::Confirmed))
        .await?;
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

    let completed = service
        .update(&actor, pending.id, status_change(AppointmentStatus::Completed))
        .await?;
    assert_eq!(completed.status, AppointmentStatus::Completed);

    Ok(())
}

/// Tests updating an appointment ID that does not exist.
///
/// Verifies that the update does not fall back to inserting a new record.
///
/// Expected: Err(NotFound) and no appointments stored
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let actor = admin(db).await;
    let service = AppointmentService::new(db);

    let result = service
        .update(&actor, 9999, status_change(AppointmentStatus::Confirmed))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.list(&actor, None).await?.is_empty());

    Ok(())
}

/// Tests applying the same non-conflicting update twice.
///
/// Verifies that the second application leaves every stored field as the first one
/// did. Only `version` moves, advancing by one per write.
///
/// Expected: identical records apart from versions 2 and 3
#[tokio::test]
async fn repeated_update_yields_same_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) = create_appointment_with_dependencies(db).await?;
    let actor = admin(db).await;
    let service = AppointmentService::new(db);

    let first = service
        .update(&actor, appointment.id, status_change(AppointmentStatus::Confirmed))
        .await?;
    let second = service
        .update(&actor, appointment.id, status_change(AppointmentStatus::Confirmed))
        .await?;

    assert_eq!(first.version, 2);
    assert_eq!(second.version, 3);
    assert_eq!(
        Appointment {
            version: first.version,
            ..second.clone()
        },
        first
    );

    let stored = service.get(&actor, appointment.id).await?;
    assert_eq!(stored, second);

    Ok(())
}

/// Tests updating with a negative add-on price or a blank duration.
///
/// Expected: validation errors and an untouched record at version 1
#[tokio::test]
async fn rejects_invalid_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) = create_appointment_with_dependencies(db).await?;
    let actor = admin(db).await;
    let service = AppointmentService::new(db);

    let negative_add_on = service
        .update(
            &actor,
            appointment.id,
            UpdateAppointmentParam {
                changes: AppointmentChanges {
                    add_ons: Some(vec![AddOn {
                        name: "Spa dos pés".to_string(),
                        price: -5.0,
                        per_unit: false,
                        quantity: 1,
                    }]),
                    ..Default::default()
                },
                expected_version: None,
            },
        )
        .await;
    assert!(matches!(
        negative_add_on,
        Err(AppError::ValidationErr(ValidationError::InvalidField { field: "price", .. }))
    ));

    let blank_duration = service
        .update(
            &actor,
            appointment.id,
            UpdateAppointmentParam {
                changes: AppointmentChanges {
                    estimated_duration: Some(String::new()),
                    ..Default::default()
                },
                expected_version: None,
            },
        )
        .await;
    assert!(matches!(
        blank_duration,
        Err(AppError::ValidationErr(ValidationError::MissingField("estimatedDuration")))
    ));

    let stored = service.get(&actor, appointment.id).await?;
    assert_eq!(stored.version, 1);
    assert_eq!(stored.estimated_duration, appointment.estimated_duration);

    Ok(())
}

/// Tests that each successful update increments the version.
///
/// Expected: versions 2 then 3
#[tokio::test]
async fn increments_version_on_each_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) = create_appointment_with_dependencies(db).await?;
    let actor = admin(db).await;
    let service = AppointmentService::new(db);

    let first = service
        .update(&actor, appointment.id, status_change(AppointmentStatus::Confirmed))
        .await?;
    assert_eq!(first.version, 2);

    let second = service
        .update(
            &actor,
            appointment.id,
            UpdateAppointmentParam {
                changes: AppointmentChanges {
                    status: Some(AppointmentStatus::Completed),
                    ..Default::default()
                },
                expected_version: Some(2),
            },
        )
        .await?;
    assert_eq!(second.version, 3);

    Ok(())
}

/// Tests updating with a version the caller read before someone else's write.
///
/// Verifies that the stale write is refused with the latest status and version and
/// that the newer write survives.
///
/// Expected: Err(ConcurrentModification) reporting version 2
#[tokio::test]
async fn refuses_stale_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) = create_appointment_with_dependencies(db).await?;
    let actor = admin(db).await;
    let service = AppointmentService::new(db);

    service
        .update(&actor, appointment.id, status_change(AppointmentStatus::Cancelled))
        .await?;

    let result = service
        .update(
            &actor,
            appointment.id,
            UpdateAppointmentParam {
                changes: AppointmentChanges {
                    status: Some(AppointmentStatus::Confirmed),
                    ..Default::default()
                },
                expected_version: Some(1),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AppointmentErr(AppointmentError::ConcurrentModification {
            current_status: AppointmentStatus::Cancelled,
            current_version: 2,
        }))
    ));

    let stored = service.get(&actor, appointment.id).await?;
    assert_eq!(stored.status, AppointmentStatus::Cancelled);
    assert_eq!(stored.version, 2);

    Ok(())
}

/// Tests that a client cannot update another client's appointment.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_other_clients_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) = create_appointment_with_dependencies(db).await?;
    let stranger = User::from_entity(factory::create_client(db).await?);

    let result = AppointmentService::new(db)
        .update(&stranger, appointment.id, status_change(AppointmentStatus::Cancelled))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a client moving their appointment to another client.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn refuses_client_reassignment_by_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, _, _, appointment) = create_appointment_with_dependencies(db).await?;
    let other = factory::create_client(db).await?;
    let owner = User::from_entity(client);

    let result = AppointmentService::new(db)
        .update(
            &owner,
            appointment.id,
            UpdateAppointmentParam {
                changes: AppointmentChanges {
                    client_id: Some(other.id),
                    ..Default::default()
                },
                expected_version: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests deleting an appointment twice.
///
/// Expected: Ok, then Err(NotFound)
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) = create_appointment_with_dependencies(db).await?;
    let service = AppointmentService::new(db);

    service.delete(appointment.id).await?;
    let result = service.delete(appointment.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
