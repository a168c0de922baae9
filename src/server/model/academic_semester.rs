//! Academic semester domain models and parameters.
//!
//! Holds the closed sets of titles, codes and months a semester may use, the fixed
//! title → code mapping, and the parameter types for create, update and list
//! operations.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::model::{
    academic_semester::{
        AcademicSemesterDto, CreateAcademicSemesterDto, UpdateAcademicSemesterDto,
    },
    api::MetaDto,
};

pub const SEMESTER_TITLES: &[&str] = &["Autumn", "Summer", "Fall"];

pub const SEMESTER_CODES: &[&str] = &["01", "02", "03"];

pub const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the only code a semester with the given title may carry.
pub fn code_for_title(title: &str) -> Option<&'static str> {
    match title {
        "Autumn" => Some("01"),
        "Summer" => Some("02"),
        "Fall" => Some("03"),
        _ => None,
    }
}

/// An academic semester, unique per title and year.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicSemester {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub code: String,
    pub start_month: String,
    pub end_month: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AcademicSemester {
    /// Converts an entity model to the semester domain model at the repository boundary.
    pub fn from_entity(entity: entity::academic_semester::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            year: entity.year,
            code: entity.code,
            start_month: entity.start_month,
            end_month: entity.end_month,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the semester domain model to a DTO for API responses.
    pub fn into_dto(self) -> AcademicSemesterDto {
        AcademicSemesterDto {
            id: self.id,
            title: self.title,
            year: self.year,
            code: self.code,
            start_month: self.start_month,
            end_month: self.end_month,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new semester.
#[derive(Debug, Clone)]
pub struct CreateAcademicSemesterParam {
    pub title: String,
    pub year: i32,
    pub code: String,
    pub start_month: String,
    pub end_month: String,
}

impl From<CreateAcademicSemesterDto> for CreateAcademicSemesterParam {
    fn from(dto: CreateAcademicSemesterDto) -> Self {
        Self {
            title: dto.title,
            year: dto.year,
            code: dto.code,
            start_month: dto.start_month,
            end_month: dto.end_month,
        }
    }
}

/// Parameters for updating an existing semester; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateAcademicSemesterParam {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub code: Option<String>,
    pub start_month: Option<String>,
    pub end_month: Option<String>,
}

impl From<UpdateAcademicSemesterDto> for UpdateAcademicSemesterParam {
    fn from(dto: UpdateAcademicSemesterDto) -> Self {
        Self {
            title: dto.title,
            year: dto.year,
            code: dto.code,
            start_month: dto.start_month,
            end_month: dto.end_month,
        }
    }
}

/// Column a semester list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    Title,
    Year,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filters applied to a semester list.
///
/// `search_term` matches title or code partially, or the year exactly; the remaining
/// fields are exact matches.
#[derive(Debug, Clone, Default)]
pub struct AcademicSemesterFilter {
    pub search_term: Option<String>,
    pub title: Option<String>,
    pub code: Option<String>,
    pub year: Option<i32>,
}

/// Largest page size a list query may request.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Page selection and ordering for a list query. `page` is one-based.
#[derive(Debug, Clone, Copy)]
pub struct PaginationOptions {
    pub page: u64,
    pub limit: u64,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl PaginationOptions {
    /// Number of rows skipped before this page, or `None` when the offset does not
    /// fit a SQL `OFFSET` (a signed 64-bit integer).
    pub fn offset(&self) -> Option<u64> {
        self.page
            .saturating_sub(1)
            .checked_mul(self.limit)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}

/// A page of semesters with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAcademicSemesters {
    pub semesters: Vec<AcademicSemester>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl PaginatedAcademicSemesters {
    pub fn meta(&self) -> MetaDto {
        MetaDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_page: self.total.div_ceil(self.limit.max(1)),
        }
    }
}
