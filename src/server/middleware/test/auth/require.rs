use super::*;

/// Tests a request without a logged in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session whose user was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_session_of_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests that any logged in user passes an empty permission list.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_client(db).await?;
    AuthSession::new(session).set_user_id(client.id).await?;

    let user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(user.id, client.id);
    assert_eq!(user.role, UserRole::Client);

    Ok(())
}

/// Tests the admin permission.
///
/// Expected: Ok for an admin, Err(AccessDenied) for a manicure
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manicure = factory::create_manicure(db).await?;
    AuthSession::new(session).set_user_id(manicure.id).await?;

    let result = AuthGuard::new(db, session).require(&[Permission::Admin]).await;
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, manicure.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session).require(&[Permission::Admin]).await?;
    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests the staff permission.
///
/// Expected: Ok for manicures and admins, Err(AccessDenied) for clients
#[tokio::test]
async fn staff_permission_accepts_manicure_and_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for role in [StoredRole::Manicure, StoredRole::Admin] {
        let staff = factory::user::UserFactory::new(db).role(role).build().await?;
        AuthSession::new(session).set_user_id(staff.id).await?;

        let user = AuthGuard::new(db, session).require(&[Permission::Staff]).await?;
        assert_eq!(user.id, staff.id);
    }

    let client = factory::create_client(db).await?;
    AuthSession::new(session).set_user_id(client.id).await?;

    let result = AuthGuard::new(db, session).require(&[Permission::Staff]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that logging out clears the user from the session.
///
/// Expected: Err(AuthError::UserNotInSession) after `clear`
#[tokio::test]
async fn cleared_session_is_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_client(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(client.id).await?;
    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);

    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
