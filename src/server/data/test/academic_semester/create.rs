use super::*;

/// Tests creating a semester.
///
/// Expected: Ok with all provided fields stored
#[tokio::test]
async fn creates_semester() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicSemesterRepository::new(db);
    let semester = repo.create(create_param("Summer", 2031, "02")).await?;

    assert_eq!(semester.title, "Summer");
    assert_eq!(semester.year, 2031);
    assert_eq!(semester.code, "02");
    assert_eq!(semester.start_month, "January");
    assert_eq!(semester.end_month, "June");
    assert!(repo.find_by_id(semester.id).await?.is_some());

    Ok(())
}

/// Tests that every failing field is reported in the order checked.
///
/// Expected: Err(ValidationErr) with title, code and endMonth entries
#[tokio::test]
async fn reports_every_invalid_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicSemesterRepository::new(db);
    let mut param = create_param("Winter", 2031, "");
    param.end_month = "Smarch".to_string();
    let result = repo.create(param).await;

    let Err(AppError::ValidationErr(err)) = result else {
        panic!("expected validation error, got {result:?}");
    };
    let fields: Vec<&str> = err.errors.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["title", "code", "endMonth"]);
    assert_eq!(err.errors["code"].message, "Code is required");
    assert_eq!(
        err.errors["title"].message,
        "`Winter` is not a valid enum value for path `title`."
    );

    Ok(())
}

/// Tests that a year outside four digits is rejected.
///
/// Expected: Err(ValidationErr) for `year`
#[tokio::test]
async fn rejects_out_of_range_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicSemesterRepository::new(db);
    let result = repo.create(create_param("Autumn", 99, "01")).await;

    let Err(AppError::ValidationErr(err)) = result else {
        panic!("expected validation error, got {result:?}");
    };
    assert!(err.errors.contains_key("year"));

    Ok(())
}
