use super::*;
use test_utils::factory::salon_service::SalonServiceFactory;

/// Tests listing the whole catalog.
///
/// Expected: Ok with entries sorted by name
#[tokio::test]
async fn returns_services_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SalonService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SalonServiceFactory::new(db).name("Pedicure").build().await?;
    SalonServiceFactory::new(db).name("Alongamento").build().await?;
    SalonServiceFactory::new(db).name("Manicure").build().await?;

    let repo = SalonServiceRepository::new(db);
    let services = repo.find_all(None).await?;

    let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alongamento", "Manicure", "Pedicure"]);

    Ok(())
}

/// Tests listing the catalog of one manicure.
///
/// Expected: Ok with only that manicure's entries
#[tokio::test]
async fn filters_by_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SalonService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff_a = factory::create_manicure(db).await?;
    let staff_b = factory::create_manicure(db).await?;
    let own = factory::create_salon_service(db, Some(staff_a.id)).await?;
    factory::create_salon_service(db, Some(staff_b.id)).await?;
    factory::create_salon_service(db, None).await?;

    let repo = SalonServiceRepository::new(db);
    let services = repo.find_all(Some(staff_a.id)).await?;

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id, own.id);

    Ok(())
}
