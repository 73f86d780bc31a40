use super::*;

/// Tests saving metadata for the first time.
///
/// Expected: the provided fields are stored with a normalized email
#[tokio::test]
async fn creates_record_on_first_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(SalonInfo).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SalonInfoService::new(db);
    service
        .update(UpdateSalonInfoParam {
            name: Some("Studio Bela".to_string()),
            email: Some(" Contato@Studio.com ".to_string()),
            galleries: Some(vec![PhotoGallery {
                name: "Unhas".to_string(),
                photos: vec!["/fotos/1.jpg".to_string()],
            }]),
            ..Default::default()
        })
        .await?;

    let dto = service.get().await?.into_dto();
    assert_eq!(dto.name, "Studio Bela");
    assert_eq!(dto.email, "contato@studio.com");
    assert_eq!(dto.galleries.len(), 1);

    Ok(())
}

/// Tests clearing the email with an empty string.
///
/// Expected: Ok with an empty email
#[tokio::test]
async fn empty_email_clears_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(SalonInfo).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SalonInfoFactory::new(db)
        .email("antigo@example.com")
        .build()
        .await?;

    let info = SalonInfoService::new(db)
        .update(UpdateSalonInfoParam {
            email: Some(String::new()),
            ..Default::default()
        })
        .await?;

    assert_eq!(info.into_dto().email, "");

    Ok(())
}

/// Tests rejecting a malformed email and an unnamed gallery.
///
/// Expected: Err(ValidationErr) for both, nothing stored
#[tokio::test]
async fn validates_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(SalonInfo).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SalonInfoService::new(db);

    let bad_email = service
        .update(UpdateSalonInfoParam {
            email: Some("sem-arroba".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        bad_email,
        Err(AppError::ValidationErr(ValidationError::InvalidEmail(_)))
    ));

    let unnamed = service
        .update(UpdateSalonInfoParam {
            galleries: Some(vec![PhotoGallery {
                name: " ".to_string(),
                photos: Vec::new(),
            }]),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        unnamed,
        Err(AppError::ValidationErr(ValidationError::MissingField(_)))
    ));

    assert!(service.get().await?.updated_at.is_none());

    Ok(())
}
