use super::*;
use test_utils::factory::user::UserFactory;
use entity::sea_orm_active_enums::UserRole as StoredRole;

/// Tests listing manicures.
///
/// Expected: Ok with only manicures, sorted by name
#[tokio::test]
async fn returns_only_requested_role_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Paula").role(StoredRole::Manicure).build().await?;
    UserFactory::new(db).name("Bianca").role(StoredRole::Manicure).build().await?;
    UserFactory::new(db).name("Carla").build().await?;
    factory::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let manicures = repo.get_by_role(UserRole::Manicure).await?;

    let names: Vec<&str> = manicures.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Bianca", "Paula"]);

    Ok(())
}
