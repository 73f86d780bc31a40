use super::*;
use crate::server::model::add_on::AddOn;
use chrono::{TimeZone, Utc};

/// Tests creating an appointment.
///
/// Verifies that a new appointment is stored with the requested fields, the initial
/// version and its add-ons in order.
///
/// Expected: Ok with version 1
#[tokio::test]
async fn creates_appointment_at_initial_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let staff = factory::create_manicure(db).await?;
    let service = factory::create_salon_service(db, Some(staff.id)).await?;

    let repo = AppointmentRepository::new(db);
    let scheduled_at = Utc.with_ymd_and_hms(2026, 11, 3, 14, 0, 0).unwrap();
    let appointment = repo
        .create(CreateAppointmentParam {
            service_id: service.id,
            estimated_duration: "1h30".to_string(),
            scheduled_at,
            client_id: client.id,
            staff_id: staff.id,
            status: AppointmentStatus::Pending,
            add_ons: vec![
                AddOn {
                    name: "Esmaltação em gel".to_string(),
                    price: 25.0,
                    per_unit: false,
                    quantity: 1,
                },
                AddOn {
                    name: "Nail art".to_string(),
                    price: 5.0,
                    per_unit: true,
                    quantity: 4,
                },
            ],
        })
        .await?;

    assert_eq!(appointment.version, 1);
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.scheduled_at, scheduled_at);
    assert_eq!(appointment.add_ons.len(), 2);
    assert_eq!(appointment.add_ons[1].name, "Nail art");
    assert_eq!(appointment.add_ons[1].quantity, 4);

    let stored = repo.find_by_id(appointment.id).await?;
    assert_eq!(stored, Some(appointment));

    Ok(())
}

/// Tests creating an appointment for a missing service.
///
/// Verifies that the foreign key constraint rejects the insert.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_nonexistent_service() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let staff = factory::create_manicure(db).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .create(CreateAppointmentParam {
            service_id: 999,
            estimated_duration: "1h".to_string(),
            scheduled_at: Utc::now(),
            client_id: client.id,
            staff_id: staff.id,
            status: AppointmentStatus::Pending,
            add_ons: Vec::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
