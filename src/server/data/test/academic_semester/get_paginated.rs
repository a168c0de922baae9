use super::*;

/// Tests that the requested page and the total count are returned.
///
/// Expected: second page of size 2 holds 2 of 5 semesters, total 5
#[tokio::test]
async fn returns_requested_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_semesters_for_years(db, 2030, 5).await?;

    let repo = AcademicSemesterRepository::new(db);
    let (semesters, total) = repo
        .get_paginated(
            &AcademicSemesterFilter::default(),
            PaginationOptions {
                page: 2,
                limit: 2,
                sort_by: SortField::Year,
                sort_order: SortOrder::Asc,
            },
        )
        .await?;

    assert_eq!(total, 5);
    let years: Vec<i32> = semesters.iter().map(|semester| semester.year).collect();
    assert_eq!(years, vec![2032, 2033]);

    Ok(())
}

/// Tests ordering by year descending.
///
/// Expected: newest year first
#[tokio::test]
async fn sorts_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_semesters_for_years(db, 2030, 3).await?;

    let repo = AcademicSemesterRepository::new(db);
    let (semesters, _) = repo
        .get_paginated(
            &AcademicSemesterFilter::default(),
            PaginationOptions {
                sort_by: SortField::Year,
                sort_order: SortOrder::Desc,
                ..PaginationOptions::default()
            },
        )
        .await?;

    let years: Vec<i32> = semesters.iter().map(|semester| semester.year).collect();
    assert_eq!(years, vec![2032, 2031, 2030]);

    Ok(())
}

/// Tests the search term and exact filters.
///
/// Expected: only semesters matching every condition are counted
#[tokio::test]
async fn applies_search_term_and_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::academic_semester::AcademicSemesterFactory::new(db)
        .year(2030)
        .build()
        .await?;
    factory::academic_semester::AcademicSemesterFactory::new(db)
        .title("Fall")
        .code("03")
        .year(2030)
        .build()
        .await?;
    factory::academic_semester::AcademicSemesterFactory::new(db)
        .title("Fall")
        .code("03")
        .year(2031)
        .build()
        .await?;

    let repo = AcademicSemesterRepository::new(db);

    let search = AcademicSemesterFilter {
        search_term: Some("Fal".to_string()),
        ..AcademicSemesterFilter::default()
    };
    let (_, total) = repo
        .get_paginated(&search, PaginationOptions::default())
        .await?;
    assert_eq!(total, 2);

    let by_year = AcademicSemesterFilter {
        search_term: Some("2030".to_string()),
        ..AcademicSemesterFilter::default()
    };
    let (_, total) = repo
        .get_paginated(&by_year, PaginationOptions::default())
        .await?;
    assert_eq!(total, 2);

    let exact = AcademicSemesterFilter {
        title: Some("Fall".to_string()),
        year: Some(2031),
        ..AcademicSemesterFilter::default()
    };
    let (semesters, total) = repo
        .get_paginated(&exact, PaginationOptions::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(semesters[0].year, 2031);

    Ok(())
}

/// Tests a page past the last one.
///
/// Expected: empty page with the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AcademicSemester)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_academic_semester(db).await?;

    let repo = AcademicSemesterRepository::new(db);
    let (semesters, total) = repo
        .get_paginated(
            &AcademicSemesterFilter::default(),
            PaginationOptions {
                page: 3,
                ..PaginationOptions::default()
            },
        )
        .await?;

    assert!(semesters.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
