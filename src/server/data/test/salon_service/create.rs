use super::*;

/// Tests creating a catalog entry with add-ons.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_service_with_add_ons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SalonService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_manicure(db).await?;

    let repo = SalonServiceRepository::new(db);
    let service = repo
        .create(CreateSalonServiceParam {
            name: "Manicure completa".to_string(),
            description: Some("Cutilagem e esmaltação".to_string()),
            price: 45.0,
            duration: "1h".to_string(),
            staff_id: Some(staff.id),
            add_ons: vec![AddOn {
                name: "Francesinha".to_string(),
                price: 10.0,
                per_unit: false,
                quantity: 1,
            }],
        })
        .await?;

    assert_eq!(service.name, "Manicure completa");
    assert_eq!(service.price, 45.0);
    assert_eq!(service.staff_id, Some(staff.id));
    assert_eq!(service.add_ons.len(), 1);
    assert_eq!(service.add_ons[0].name, "Francesinha");

    Ok(())
}
