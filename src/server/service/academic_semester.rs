//! Academic semester service for business logic.
//!
//! Enforces the rules that involve more than a single field: the fixed title → code
//! mapping, uniqueness of a title within a year, and existence checks that turn a
//! missing semester into a 404.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::academic_semester::AcademicSemesterRepository,
    error::{api::ApiError, AppError},
    model::academic_semester::{
        code_for_title, AcademicSemester, AcademicSemesterFilter, CreateAcademicSemesterParam,
        PaginatedAcademicSemesters, PaginationOptions, UpdateAcademicSemesterParam,
    },
};

const INVALID_CODE: &str = "Invalid Semester Code";
const ALREADY_EXISTS: &str = "Academic semester is already exist!";
const NOT_FOUND: &str = "Academic semester not found";
const PAGE_OUT_OF_RANGE: &str = "Page is out of range";

/// Service providing business logic for academic semesters.
pub struct AcademicSemesterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicSemesterService<'a> {
    /// Creates a new AcademicSemesterService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AcademicSemesterService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new semester.
    ///
    /// # Arguments
    /// - `param` - Semester data
    ///
    /// # Returns
    /// - `Ok(AcademicSemester)` - The created semester
    /// - `Err(AppError::ApiErr(_))` - 400 when the code does not belong to the title, 409
    ///   when the title already exists for that year
    /// - `Err(AppError::ValidationErr(_))` - Document validation failed
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn create(
        &self,
        param: CreateAcademicSemesterParam,
    ) -> Result<AcademicSemester, AppError> {
        ensure_code_matches(&param.title, &param.code)?;

        let repo = AcademicSemesterRepository::new(self.db);

        if repo
            .find_by_title_and_year(&param.title, param.year)
            .await?
            .is_some()
        {
            return Err(ApiError::conflict(ALREADY_EXISTS).into());
        }

        // A concurrent create can still slip past the lookup; the unique index catches it.
        match repo.create(param).await {
            Err(err) if err.is_unique_violation() => {
                Err(ApiError::conflict(ALREADY_EXISTS).into())
            }
            other => other,
        }
    }

    /// Gets one page of semesters.
    ///
    /// # Arguments
    /// - `filter` - Search term and exact filters
    /// - `options` - Page selection and ordering
    ///
    /// # Returns
    /// - `Ok(PaginatedAcademicSemesters)` - The page together with its pagination data
    /// - `Err(AppError::ApiErr(_))` - 400 when the page lies beyond any addressable offset
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn get_all(
        &self,
        filter: AcademicSemesterFilter,
        options: PaginationOptions,
    ) -> Result<PaginatedAcademicSemesters, AppError> {
        if options.offset().is_none() {
            return Err(ApiError::bad_request(PAGE_OUT_OF_RANGE).into());
        }

        let repo = AcademicSemesterRepository::new(self.db);

        let (semesters, total) = repo.get_paginated(&filter, options).await?;

        Ok(PaginatedAcademicSemesters {
            semesters,
            page: options.page,
            limit: options.limit,
            total,
        })
    }

    /// Gets a single semester.
    ///
    /// # Returns
    /// - `Ok(AcademicSemester)` - The semester
    /// - `Err(AppError::ApiErr(_))` - 404 when no semester has that ID
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn get_by_id(&self, id: Uuid) -> Result<AcademicSemester, AppError> {
        let repo = AcademicSemesterRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(NOT_FOUND).into())
    }

    /// Updates a semester.
    ///
    /// The title → code mapping is checked when both are provided. Changing the title or
    /// year must not collide with another semester.
    ///
    /// # Returns
    /// - `Ok(AcademicSemester)` - The updated semester
    /// - `Err(AppError::ApiErr(_))` - 400 on a code mismatch, 404 when missing, 409 on a
    ///   title and year collision
    /// - `Err(AppError::ValidationErr(_))` - Document validation failed
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateAcademicSemesterParam,
    ) -> Result<AcademicSemester, AppError> {
        if let (Some(title), Some(code)) = (&param.title, &param.code) {
            ensure_code_matches(title, code)?;
        }

        let repo = AcademicSemesterRepository::new(self.db);

        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

        if param.title.is_some() || param.year.is_some() {
            let title = param.title.as_deref().unwrap_or(&current.title);
            let year = param.year.unwrap_or(current.year);

            if let Some(existing) = repo.find_by_title_and_year(title, year).await? {
                if existing.id != id {
                    return Err(ApiError::conflict(ALREADY_EXISTS).into());
                }
            }
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| ApiError::not_found(NOT_FOUND).into())
    }

    /// Deletes a semester.
    ///
    /// # Returns
    /// - `Ok(AcademicSemester)` - The deleted semester
    /// - `Err(AppError::ApiErr(_))` - 404 when no semester has that ID
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn delete(&self, id: Uuid) -> Result<AcademicSemester, AppError> {
        let repo = AcademicSemesterRepository::new(self.db);

        repo.delete(id)
            .await?
            .ok_or_else(|| ApiError::not_found(NOT_FOUND).into())
    }
}

fn ensure_code_matches(title: &str, code: &str) -> Result<(), ApiError> {
    match code_for_title(title) {
        Some(expected) if expected != code => Err(ApiError::bad_request(INVALID_CODE)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use test_utils::{builder::TestBuilder, factory};

    fn create_param(title: &str, year: i32, code: &str) -> CreateAcademicSemesterParam {
        CreateAcademicSemesterParam {
            title: title.to_string(),
            year,
            code: code.to_string(),
            start_month: "January".to_string(),
            end_month: "May".to_string(),
        }
    }

    fn api_status(result: Result<AcademicSemester, AppError>) -> Option<StatusCode> {
        match result {
            Err(AppError::ApiErr(err)) => Some(err.status_code),
            _ => None,
        }
    }

    #[tokio::test]
    async fn rejects_code_not_matching_title() -> Result<(), AppError> {
        let test = TestBuilder::new().with_campus_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AcademicSemesterService::new(db);
        let result = service.create(create_param("Fall", 2030, "01")).await;

        let Err(AppError::ApiErr(err)) = result else {
            panic!("expected api error, got {result:?}");
        };
        assert_eq!(err, ApiError::bad_request("Invalid Semester Code"));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_title_in_year() -> Result<(), AppError> {
        let test = TestBuilder::new().with_campus_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AcademicSemesterService::new(db);
        service.create(create_param("Summer", 2030, "02")).await?;

        let result = service.create(create_param("Summer", 2030, "02")).await;
        assert_eq!(api_status(result), Some(StatusCode::CONFLICT));

        // Same title in another year is fine.
        service.create(create_param("Summer", 2031, "02")).await?;

        Ok(())
    }

    #[tokio::test]
    async fn reports_missing_semester() -> Result<(), AppError> {
        let test = TestBuilder::new().with_campus_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AcademicSemesterService::new(db);

        let result = service.get_by_id(Uuid::new_v4()).await;
        assert_eq!(api_status(result), Some(StatusCode::NOT_FOUND));

        let result = service
            .update(Uuid::new_v4(), UpdateAcademicSemesterParam::default())
            .await;
        assert_eq!(api_status(result), Some(StatusCode::NOT_FOUND));

        let result = service.delete(Uuid::new_v4()).await;
        assert_eq!(api_status(result), Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_collision_with_other_semester() -> Result<(), AppError> {
        let test = TestBuilder::new().with_campus_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::academic_semester::AcademicSemesterFactory::new(db)
            .year(2031)
            .build()
            .await?;
        let target = factory::create_academic_semester(db).await?;

        let service = AcademicSemesterService::new(db);

        let result = service
            .update(
                target.id,
                UpdateAcademicSemesterParam {
                    year: Some(2031),
                    ..UpdateAcademicSemesterParam::default()
                },
            )
            .await;
        assert_eq!(api_status(result), Some(StatusCode::CONFLICT));

        // Re-saving its own title and year is not a collision.
        let updated = service
            .update(
                target.id,
                UpdateAcademicSemesterParam {
                    title: Some("Autumn".to_string()),
                    code: Some("01".to_string()),
                    year: Some(2030),
                    ..UpdateAcademicSemesterParam::default()
                },
            )
            .await?;
        assert_eq!(updated.year, 2030);

        Ok(())
    }

    #[tokio::test]
    async fn get_all_reports_page_meta() -> Result<(), AppError> {
        let test = TestBuilder::new().with_campus_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_semesters_for_years(db, 2030, 3).await?;

        let service = AcademicSemesterService::new(db);
        let page = service
            .get_all(
                AcademicSemesterFilter::default(),
                PaginationOptions {
                    limit: 2,
                    ..PaginationOptions::default()
                },
            )
            .await?;

        assert_eq!(page.semesters.len(), 2);
        let meta = page.meta();
        assert_eq!(meta.total, 3);
        assert_eq!(meta.total_page, 2);
        assert_eq!(meta.page, 1);

        Ok(())
    }

    #[tokio::test]
    async fn get_all_rejects_overflowing_page() -> Result<(), AppError> {
        let test = TestBuilder::new().with_campus_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AcademicSemesterService::new(db);
        let result = service
            .get_all(
                AcademicSemesterFilter::default(),
                PaginationOptions {
                    page: u64::MAX,
                    limit: 100,
                    ..PaginationOptions::default()
                },
            )
            .await;

        let Err(AppError::ApiErr(err)) = result else {
            panic!("expected bad request, got {result:?}");
        };
        assert_eq!(err, ApiError::bad_request("Page is out of range"));

        Ok(())
    }

    #[test]
    fn offset_must_fit_sql_offset() {
        let offset = |page, limit| {
            PaginationOptions {
                page,
                limit,
                ..PaginationOptions::default()
            }
            .offset()
        };

        assert_eq!(offset(1, 10), Some(0));
        assert_eq!(offset(3, 100), Some(200));
        assert_eq!(offset(u64::MAX, 100), None);
        assert_eq!(offset(i64::MAX as u64, 2), None);
    }
}
