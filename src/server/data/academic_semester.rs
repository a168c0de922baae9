//! Academic semester data repository for database operations
//!
//! Provides the `AcademicSemesterRepository` for creating, querying, updating and
//! deleting semesters. Writes are checked by document validation first.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::validate::DocumentValidator,
    error::AppError,
    model::academic_semester::{
        AcademicSemester, AcademicSemesterFilter, CreateAcademicSemesterParam,
        PaginationOptions, SortField, SortOrder, UpdateAcademicSemesterParam, MONTHS,
        SEMESTER_CODES, SEMESTER_TITLES,
    },
};

/// Repository providing database operations for academic semesters.
pub struct AcademicSemesterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicSemesterRepository<'a> {
    /// Creates a new AcademicSemesterRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AcademicSemesterRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and inserts a new semester
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the semester data
    ///
    /// # Returns
    /// - `Ok(AcademicSemester)` - The created semester as a domain model
    /// - `Err(AppError::ValidationErr(_))` - One or more fields failed document validation
    /// - `Err(AppError::DbErr(_))` - Database error during insert
    pub async fn create(
        &self,
        param: CreateAcademicSemesterParam,
    ) -> Result<AcademicSemester, AppError> {
        validate_semester(
            Some(param.title.as_str()),
            Some(param.year),
            Some(param.code.as_str()),
            Some(param.start_month.as_str()),
            Some(param.end_month.as_str()),
            true,
        )?;

        let now = Utc::now();
        let entity = entity::academic_semester::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(param.title),
            year: ActiveValue::Set(param.year),
            code: ActiveValue::Set(param.code),
            start_month: ActiveValue::Set(param.start_month),
            end_month: ActiveValue::Set(param.end_month),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(AcademicSemester::from_entity(entity))
    }

    /// Finds a semester by ID
    ///
    /// # Returns
    /// - `Ok(Some(AcademicSemester))` - The semester if found
    /// - `Ok(None)` - No semester with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AcademicSemester>, DbErr> {
        let entity = entity::prelude::AcademicSemester::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(AcademicSemester::from_entity))
    }

    /// Finds the semester with the given title in the given year
    ///
    /// # Returns
    /// - `Ok(Some(AcademicSemester))` - A matching semester exists
    /// - `Ok(None)` - No matching semester
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_title_and_year(
        &self,
        title: &str,
        year: i32,
    ) -> Result<Option<AcademicSemester>, DbErr> {
        let entity = entity::prelude::AcademicSemester::find()
            .filter(entity::academic_semester::Column::Title.eq(title))
            .filter(entity::academic_semester::Column::Year.eq(year))
            .one(self.db)
            .await?;

        Ok(entity.map(AcademicSemester::from_entity))
    }

    /// Gets one page of semesters matching the filter
    ///
    /// # Arguments
    /// - `filter` - Search term and exact-match filters
    /// - `options` - One-based page, page size and ordering
    ///
    /// # Returns
    /// - `Ok((semesters, total))` - Semesters of the requested page and the total number of matches
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &AcademicSemesterFilter,
        options: PaginationOptions,
    ) -> Result<(Vec<AcademicSemester>, u64), DbErr> {
        use entity::academic_semester::Column;

        let mut condition = Condition::all();

        if let Some(term) = filter.search_term.as_deref().filter(|term| !term.is_empty()) {
            let mut search = Condition::any()
                .add(Column::Title.contains(term))
                .add(Column::Code.contains(term));
            if let Ok(year) = term.parse::<i32>() {
                search = search.add(Column::Year.eq(year));
            }
            condition = condition.add(search);
        }
        if let Some(title) = &filter.title {
            condition = condition.add(Column::Title.eq(title.as_str()));
        }
        if let Some(code) = &filter.code {
            condition = condition.add(Column::Code.eq(code.as_str()));
        }
        if let Some(year) = filter.year {
            condition = condition.add(Column::Year.eq(year));
        }

        let column = match options.sort_by {
            SortField::CreatedAt => Column::CreatedAt,
            SortField::Title => Column::Title,
            SortField::Year => Column::Year,
            SortField::Code => Column::Code,
        };
        let order = match options.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let paginator = entity::prelude::AcademicSemester::find()
            .filter(condition)
            .order_by(column, order)
            .paginate(self.db, options.limit.max(1));

        let total = paginator.num_items().await?;
        let entities = paginator
            .fetch_page(options.page.saturating_sub(1))
            .await?;
        let semesters = entities
            .into_iter()
            .map(AcademicSemester::from_entity)
            .collect();

        Ok((semesters, total))
    }

    /// Applies the provided fields to the semester of the provided ID
    ///
    /// # Arguments
    /// - `id` - ID of the semester to update
    /// - `param` - Fields to change; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(AcademicSemester))` - The updated semester
    /// - `Ok(None)` - No semester with that ID
    /// - `Err(AppError::ValidationErr(_))` - A provided field failed document validation
    /// - `Err(AppError::DbErr(_))` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateAcademicSemesterParam,
    ) -> Result<Option<AcademicSemester>, AppError> {
        let Some(entity) = entity::prelude::AcademicSemester::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        validate_semester(
            param.title.as_deref(),
            param.year,
            param.code.as_deref(),
            param.start_month.as_deref(),
            param.end_month.as_deref(),
            false,
        )?;

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(year) = param.year {
            active.year = ActiveValue::Set(year);
        }
        if let Some(code) = param.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(start_month) = param.start_month {
            active.start_month = ActiveValue::Set(start_month);
        }
        if let Some(end_month) = param.end_month {
            active.end_month = ActiveValue::Set(end_month);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(AcademicSemester::from_entity(entity)))
    }

    /// Deletes the semester of the provided ID
    ///
    /// # Returns
    /// - `Ok(Some(AcademicSemester))` - The semester that was deleted
    /// - `Ok(None)` - No semester with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<Option<AcademicSemester>, DbErr> {
        let Some(semester) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::AcademicSemester::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(semester))
    }
}

/// Document rules shared by create and update. With `complete` unset only the
/// fields that are present are checked.
fn validate_semester(
    title: Option<&str>,
    year: Option<i32>,
    code: Option<&str>,
    start_month: Option<&str>,
    end_month: Option<&str>,
    complete: bool,
) -> Result<(), AppError> {
    let mut validator = DocumentValidator::new();

    if complete || title.is_some() {
        validator = validator
            .required("title", title, "Title is required")
            .one_of("title", title, SEMESTER_TITLES);
    }
    if let Some(year) = year {
        validator = validator.check(
            "year",
            (1000..=9999).contains(&year),
            "Year must be a four digit number",
        );
    }
    if complete || code.is_some() {
        validator = validator
            .required("code", code, "Code is required")
            .one_of("code", code, SEMESTER_CODES);
    }
    if complete || start_month.is_some() {
        validator = validator
            .required("startMonth", start_month, "Start month is required")
            .one_of("startMonth", start_month, MONTHS);
    }
    if complete || end_month.is_some() {
        validator = validator
            .required("endMonth", end_month, "End month is required")
            .one_of("endMonth", end_month, MONTHS);
    }

    validator.finish()?;

    Ok(())
}
