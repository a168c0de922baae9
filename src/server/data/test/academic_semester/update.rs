use super::*;

/// Tests that only provided fields change.
///
/// Expected: Ok(Some) with the new end month and the untouched title kept
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_academic_semester(db).await?;

    let repo = AcademicSemesterRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateAcademicSemesterParam {
                end_month: Some("July".to_string()),
                ..UpdateAcademicSemesterParam::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.end_month, "July");
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.year, created.year);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a semester that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicSemesterRepository::new(db);
    let updated = repo
        .update(Uuid::new_v4(), UpdateAcademicSemesterParam::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that a provided field is still validated.
///
/// Expected: Err(ValidationErr) for `startMonth`
#[tokio::test]
async fn rejects_invalid_provided_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_academic_semester(db).await?;

    let repo = AcademicSemesterRepository::new(db);
    let result = repo
        .update(
            created.id,
            UpdateAcademicSemesterParam {
                start_month: Some("Undecember".to_string()),
                ..UpdateAcademicSemesterParam::default()
            },
        )
        .await;

    let Err(AppError::ValidationErr(err)) = result else {
        panic!("expected validation error, got {result:?}");
    };
    assert_eq!(err.errors.len(), 1);
    assert!(err.errors.contains_key("startMonth"));

    Ok(())
}
