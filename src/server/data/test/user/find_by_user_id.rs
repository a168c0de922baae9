use super::*;

/// Tests finding an existing user by identifier.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_id("00007")
        .role("faculty")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_user_id("00007").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().role, "faculty");

    Ok(())
}

/// Tests finding an identifier no user has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_user_id("99999").await?;

    assert!(user.is_none());

    Ok(())
}
