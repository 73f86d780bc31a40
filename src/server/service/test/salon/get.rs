use super::*;

/// Tests reading metadata before anything was saved.
///
/// Expected: default name and opening hours, empty contact fields and no galleries
#[tokio::test]
async fn returns_defaults_before_first_save() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(SalonInfo).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = SalonInfoService::new(db).get().await?.into_dto();

    assert_eq!(dto.name, DEFAULT_SALON_NAME);
    assert!(!dto.opening_hours.is_empty());
    assert_eq!(dto.phone, "");
    assert!(dto.galleries.is_empty());
    assert!(dto.updated_at.is_none());

    Ok(())
}

/// Tests reading partially filled metadata.
///
/// Expected: stored fields are kept and missing ones are defaulted
#[tokio::test]
async fn fills_missing_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(SalonInfo).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SalonInfoFactory::new(db).phone("1133334444").build().await?;

    let dto = SalonInfoService::new(db).get().await?.into_dto();

    assert_eq!(dto.phone, "1133334444");
    assert_eq!(dto.name, DEFAULT_SALON_NAME);
    assert!(dto.updated_at.is_some());

    Ok(())
}
