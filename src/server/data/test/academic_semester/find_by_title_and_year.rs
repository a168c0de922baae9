use super::*;

/// Tests that only the exact title and year pair matches.
///
/// Expected: Some for the stored pair, None when either part differs
#[tokio::test]
async fn matches_title_and_year_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::academic_semester::AcademicSemesterFactory::new(db)
        .title("Fall")
        .code("03")
        .year(2032)
        .build()
        .await?;

    let repo = AcademicSemesterRepository::new(db);

    assert!(repo.find_by_title_and_year("Fall", 2032).await?.is_some());
    assert!(repo.find_by_title_and_year("Fall", 2033).await?.is_none());
    assert!(repo.find_by_title_and_year("Autumn", 2032).await?.is_none());

    Ok(())
}
