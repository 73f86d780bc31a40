use super::*;

/// Tests registering and then logging in.
///
/// Verifies that the email is normalized, the password is stored hashed and the same
/// credentials authenticate with a differently cased email.
///
/// Expected: Ok for both steps, returning the same user
#[tokio::test]
async fn registers_and_authenticates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.create(registration(" Maria@Example.com ")).await?;

    assert_eq!(user.email, "maria@example.com");
    assert_eq!(user.phone.as_deref(), Some("11999990000"));
    assert_ne!(user.password_hash, "segredo123");

    let logged_in = service
        .authenticate("MARIA@example.com", "segredo123")
        .await?;
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests logging in with a wrong password and with an unknown email.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.create(registration("maria@example.com")).await?;

    let wrong_password = service.authenticate("maria@example.com", "errada").await;
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service.authenticate("ninguem@example.com", "segredo123").await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests registering with invalid input.
///
/// Expected: Err(ValidationErr) for a duplicate email, a malformed email and a short
/// password
#[tokio::test]
async fn validates_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.create(registration("maria@example.com")).await?;

    let duplicate = service.create(registration("MARIA@example.com")).await;
    assert!(matches!(
        duplicate,
        Err(AppError::ValidationErr(ValidationError::EmailTaken(_)))
    ));

    let malformed = service.create(registration("maria")).await;
    assert!(matches!(
        malformed,
        Err(AppError::ValidationErr(ValidationError::InvalidEmail(_)))
    ));

    let mut short_password = registration("ana@example.com");
    short_password.password = "123".to_string();
    let result = service.create(short_password).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidField {
            field: "password",
            ..
        }))
    ));

    Ok(())
}

/// Tests changing a user's email to one owned by another account.
///
/// Expected: Err(EmailTaken); keeping one's own email is allowed
#[tokio::test]
async fn update_keeps_emails_unique() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let maria = service.create(registration("maria@example.com")).await?;
    let ana = service.create(registration("ana@example.com")).await?;

    let taken = service
        .update(
            ana.id,
            UpdateUserParam {
                email: Some("maria@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        taken,
        Err(AppError::ValidationErr(ValidationError::EmailTaken(_)))
    ));

    let unchanged = service
        .update(
            maria.id,
            UpdateUserParam {
                email: Some("Maria@Example.com".to_string()),
                name: Some("Maria Silva".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(unchanged.email, "maria@example.com");
    assert_eq!(unchanged.name, "Maria Silva");

    Ok(())
}

/// Tests changing a password through update.
///
/// Expected: the new password authenticates and the old one does not
#[tokio::test]
async fn update_rehashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.create(registration("maria@example.com")).await?;

    service
        .update(
            user.id,
            UpdateUserParam {
                password: Some("nova-senha".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(service
        .authenticate("maria@example.com", "nova-senha")
        .await
        .is_ok());
    assert!(service
        .authenticate("maria@example.com", "segredo123")
        .await
        .is_err());

    Ok(())
}

/// Tests pagination metadata.
///
/// Expected: 5 users split into pages of 2 gives 3 pages, the last holding 1 user
#[tokio::test]
async fn paginates_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_client(db).await?;
    }

    let service = UserService::new(db);
    let last_page = service.list(2, 2).await?;

    assert_eq!(last_page.total, 5);
    assert_eq!(last_page.total_pages, 3);
    assert_eq!(last_page.users.len(), 1);

    Ok(())
}

/// Tests that only manicures are listed as bookable staff.
///
/// Expected: the single manicure
#[tokio::test]
async fn lists_only_manicures() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_client(db).await?;
    factory::create_admin(db).await?;
    let manicure = factory::create_manicure(db).await?;

    let manicures = UserService::new(db).list_manicures().await?;

    assert_eq!(manicures.len(), 1);
    assert_eq!(manicures[0].id, manicure.id);

    Ok(())
}

/// Tests deleting an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_unknown_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
