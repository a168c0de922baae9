use super::*;

/// Tests finding an existing semester.
///
/// Expected: Ok(Some) with the matching semester
#[tokio::test]
async fn finds_existing_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_academic_semester(db).await?;

    let repo = AcademicSemesterRepository::new(db);
    let semester = repo.find_by_id(created.id).await?;

    assert!(semester.is_some());
    assert_eq!(semester.unwrap().title, created.title);

    Ok(())
}

/// Tests finding an ID no semester has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicSemesterRepository::new(db);

    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
