use super::*;

/// Tests the empty table case.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_last_user_id().await?, None);

    Ok(())
}

/// Tests that the most recently created user is returned.
///
/// Expected: Ok(Some) with the identifier of the last insert
#[tokio::test]
async fn returns_most_recent_user_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_id("00001")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .user_id("00002")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_last_user_id().await?, Some("00002".to_string()));

    Ok(())
}
