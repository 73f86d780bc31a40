use super::*;

/// Tests a manicure editing another manicure's entry.
///
/// Expected: Err(AccessDenied) for update and delete; the entry is unchanged
#[tokio::test]
async fn manicure_cannot_modify_foreign_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .with_table(SalonService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_manicure(db).await?;
    let other = User::from_entity(factory::create_manicure(db).await?);
    let entry = factory::create_salon_service(db, Some(owner.id)).await?;
    let service = CatalogService::new(db);

    let update = service
        .update(
            &other,
            entry.id,
            UpdateSalonServiceParam {
                price: Some(1.0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        update,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let delete = service.delete(&other, entry.id).await;
    assert!(matches!(
        delete,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let stored = service.get(entry.id).await?;
    assert_eq!(stored.price, entry.price);

    Ok(())
}

/// Tests an owner updating and then deleting their entry.
///
/// Expected: the new price is stored, then the entry is gone
#[tokio::test]
async fn owner_updates_and_deletes_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .with_table(SalonService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner_entity = factory::create_manicure(db).await?;
    let entry = factory::create_salon_service(db, Some(owner_entity.id)).await?;
    let owner = User::from_entity(owner_entity);
    let service = CatalogService::new(db);

    let updated = service
        .update(
            &owner,
            entry.id,
            UpdateSalonServiceParam {
                price: Some(50.0),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.price, 50.0);

    service.delete(&owner, entry.id).await?;

    let result = service.get(entry.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests updating an entry that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .with_table(SalonService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::create_admin(db).await?);

    let result = CatalogService::new(db)
        .update(&admin, 9999, UpdateSalonServiceParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
