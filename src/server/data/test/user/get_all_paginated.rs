use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the requested page is returned along with the total user count.
///
/// Expected: Ok with two users per page and a total of five
#[tokio::test]
async fn returns_requested_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_client(db).await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests pagination with an empty table.
///
/// Expected: Ok with no users and a total of zero
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
