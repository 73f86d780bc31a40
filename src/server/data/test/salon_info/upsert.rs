use super::*;

/// Tests the first save.
///
/// Verifies that the row is created with only the provided fields set.
///
/// Expected: Ok with name set and other fields empty
#[tokio::test]
async fn creates_row_on_first_save() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SalonInfo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SalonInfoRepository::new(db);
    let info = repo
        .upsert(UpdateSalonInfoParam {
            name: Some("Esmalteria Central".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(info.name.as_deref(), Some("Esmalteria Central"));
    assert!(info.address.is_none());
    assert!(info.galleries.is_empty());
    assert!(repo.get().await?.is_some());

    Ok(())
}

/// Tests a later partial save.
///
/// Verifies that fields missing from the update keep their stored values.
///
/// Expected: Ok with the earlier name and the new galleries
#[tokio::test]
async fn merges_into_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SalonInfo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SalonInfoRepository::new(db);
    repo.upsert(UpdateSalonInfoParam {
        name: Some("Esmalteria Central".to_string()),
        phone: Some("1133334444".to_string()),
        ..Default::default()
    })
    .await?;

    let info = repo
        .upsert(UpdateSalonInfoParam {
            phone: Some("1155556666".to_string()),
            galleries: Some(vec![PhotoGallery {
                name: "Decoradas".to_string(),
                photos: vec!["https://cdn.example.com/a.jpg".to_string()],
            }]),
            ..Default::default()
        })
        .await?;

    assert_eq!(info.name.as_deref(), Some("Esmalteria Central"));
    assert_eq!(info.phone.as_deref(), Some("1155556666"));
    assert_eq!(info.galleries.len(), 1);
    assert_eq!(info.galleries[0].name, "Decoradas");

    Ok(())
}
