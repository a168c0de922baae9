use super::*;

/// Tests deleting an existing semester.
///
/// Expected: Ok(Some) with the deleted semester, which is then gone
#[tokio::test]
async fn deletes_existing_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_academic_semester(db).await?;

    let repo = AcademicSemesterRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert_eq!(deleted.map(|semester| semester.id), Some(created.id));
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a semester that does not exist.
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

    assert!(repo.delete(Uuid::new_v4()).await?.is_none());

    Ok(())
}
