use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with the stored identifier and role
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(insert_param("00001", Some("student"))).await?;

    assert_eq!(user.user_id, "00001");
    assert_eq!(user.role, "student");

    Ok(())
}

/// Tests that a missing role is rejected before the insert.
///
/// Expected: Err(ValidationErr) with a single `role` entry and nothing stored
#[tokio::test]
async fn rejects_missing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.create(insert_param("00001", None)).await;

    let Err(AppError::ValidationErr(err)) = result else {
        panic!("expected validation error, got {result:?}");
    };
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors["role"].path, "role");
    assert_eq!(err.errors["role"].message, "Role is required");
    assert!(repo.find_by_user_id("00001").await?.is_none());

    Ok(())
}

/// Tests that a role outside the allowed set is rejected.
///
/// Expected: Err(ValidationErr) naming the offending value
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.create(insert_param("00001", Some("janitor"))).await;

    let Err(AppError::ValidationErr(err)) = result else {
        panic!("expected validation error, got {result:?}");
    };
    assert_eq!(
        err.errors["role"].message,
        "`janitor` is not a valid enum value for path `role`."
    );

    Ok(())
}

/// Tests that inserting an existing identifier fails at the database.
///
/// Expected: Err(DbErr) reporting a unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_user_id() -> Result<(), DbErr> {
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

    let repo = UserRepository::new(db);
    let result = repo.create(insert_param("00001", Some("admin"))).await;

    let Err(AppError::DbErr(err)) = result else {
        panic!("expected database error, got {result:?}");
    };
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
