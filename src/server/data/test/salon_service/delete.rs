use super::*;

/// Tests deleting an existing catalog entry.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_service_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SalonService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_salon_service(db, None).await?;

    let repo = SalonServiceRepository::new(db);
    assert!(repo.delete(service.id).await?);
    assert!(!repo.delete(service.id).await?);
    assert!(repo.find_by_id(service.id).await?.is_none());

    Ok(())
}
