use super::*;

fn seed() -> AdminSeedConfig {
    AdminSeedConfig {
        name: "Administrador".to_string(),
        email: "admin@example.com".to_string(),
        password: "admin-senha".to_string(),
    }
}

/// Tests seeding into an empty database.
///
/// Expected: Ok(Some) admin that can log in
#[tokio::test]
async fn creates_admin_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let admin = service.seed_admin(&seed()).await?.expect("admin should be created");

    assert_eq!(admin.role, UserRole::Admin);
    assert!(service
        .authenticate("admin@example.com", "admin-senha")
        .await
        .is_ok());

    Ok(())
}

/// Tests seeding when an admin already exists.
///
/// Expected: Ok(None) and no new account
#[tokio::test]
async fn skips_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    let service = UserService::new(db);
    let result = service.seed_admin(&seed()).await?;

    assert!(result.is_none());
    assert_eq!(service.list(0, 10).await?.total, 1);

    Ok(())
}
