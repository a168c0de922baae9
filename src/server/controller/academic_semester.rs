use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use crate::{
    model::{
        academic_semester::{
            AcademicSemesterDto, CreateAcademicSemesterDto, UpdateAcademicSemesterDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::param::{IdParam, QueryParam},
        error::AppError,
        middleware::validate::ValidatedJson,
        model::academic_semester::{
            AcademicSemesterFilter, PaginationOptions, SortField, SortOrder, MAX_PAGE_LIMIT,
        },
        response::build_success,
        service::academic_semester::AcademicSemesterService,
        state::AppState,
    },
};

/// Tag for grouping academic semester endpoints in OpenAPI documentation
pub static ACADEMIC_SEMESTER_TAG: &str = "academic-semester";

/// Query string accepted by the semester list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterQueryParam {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
    pub search_term: Option<String>,
    pub title: Option<String>,
    pub code: Option<String>,
    pub year: Option<i32>,
}

impl SemesterQueryParam {
    /// Splits the query into filters and page options. `page` is at least 1 and `limit`
    /// is kept within `1..=MAX_PAGE_LIMIT`.
    fn into_parts(self) -> (AcademicSemesterFilter, PaginationOptions) {
        let defaults = PaginationOptions::default();
        let options = PaginationOptions {
            page: self.page.unwrap_or(defaults.page).max(1),
            limit: self.limit.unwrap_or(defaults.limit).clamp(1, MAX_PAGE_LIMIT),
            sort_by: self.sort_by.unwrap_or(defaults.sort_by),
            sort_order: self.sort_order.unwrap_or(defaults.sort_order),
        };
        let filter = AcademicSemesterFilter {
            search_term: self.search_term,
            title: self.title,
            code: self.code,
            year: self.year,
        };

        (filter, options)
    }
}

/// Create a new academic semester.
///
/// # Returns
/// - `200 OK` - Semester created
/// - `400 Bad Request` - Body failed its schema, document validation, or the code does
///   not belong to the title
/// - `409 Conflict` - A semester with this title already exists in that year
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/academic-semesters/create-semester",
    tag = ACADEMIC_SEMESTER_TAG,
    request_body = CreateAcademicSemesterDto,
    responses(
        (status = 200, description = "Academic semester created", body = AcademicSemesterDto),
        (status = 400, description = "Invalid semester data", body = ErrorDto),
        (status = 409, description = "Semester already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_semester(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAcademicSemesterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicSemesterService::new(&state.db);

    let semester = service.create(payload.into()).await?;

    Ok(build_success(
        StatusCode::OK,
        "Academic Semester created successfully!",
        Some(semester.into_dto()),
        None,
    ))
}

/// Get a page of academic semesters.
///
/// The response carries `meta` with the page, limit, total match count and page count.
///
/// # Returns
/// - `200 OK` - Semesters of the requested page
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/academic-semesters",
    tag = ACADEMIC_SEMESTER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("sortBy" = Option<String>, Query, description = "createdAt, title, year or code"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default: desc)"),
        ("searchTerm" = Option<String>, Query, description = "Partial title or code, or exact year"),
        ("title" = Option<String>, Query, description = "Exact title"),
        ("code" = Option<String>, Query, description = "Exact code"),
        ("year" = Option<i32>, Query, description = "Exact year")
    ),
    responses(
        (status = 200, description = "Academic semesters retrieved", body = Vec<AcademicSemesterDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_semesters(
    State(state): State<AppState>,
    QueryParam(query): QueryParam<SemesterQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicSemesterService::new(&state.db);

    let (filter, options) = query.into_parts();
    let page = service.get_all(filter, options).await?;

    let meta = page.meta();
    let semesters: Vec<AcademicSemesterDto> = page
        .semesters
        .into_iter()
        .map(|semester| semester.into_dto())
        .collect();

    Ok(build_success(
        StatusCode::OK,
        "Academic semesters retrieved successfully!",
        Some(semesters),
        Some(meta),
    ))
}

/// Get a single academic semester.
///
/// # Returns
/// - `200 OK` - The semester
/// - `400 Bad Request` - `id` is not a valid identifier
/// - `404 Not Found` - No semester with that ID
#[utoipa::path(
    get,
    path = "/api/v1/academic-semesters/{id}",
    tag = ACADEMIC_SEMESTER_TAG,
    params(
        ("id" = String, Path, description = "Academic semester ID")
    ),
    responses(
        (status = 200, description = "Academic semester retrieved", body = AcademicSemesterDto),
        (status = 400, description = "Malformed ID", body = ErrorDto),
        (status = 404, description = "Academic semester not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_semester(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicSemesterService::new(&state.db);

    let semester = service.get_by_id(id).await?;

    Ok(build_success(
        StatusCode::OK,
        "Academic semester retrieved successfully!",
        Some(semester.into_dto()),
        None,
    ))
}

/// Update an academic semester.
///
/// Only the provided fields change; `title` and `code` must be provided together.
///
/// # Returns
/// - `200 OK` - The updated semester
/// - `400 Bad Request` - Malformed ID, invalid body or code mismatch
/// - `404 Not Found` - No semester with that ID
/// - `409 Conflict` - Another semester already has the resulting title and year
#[utoipa::path(
    patch,
    path = "/api/v1/academic-semesters/{id}",
    tag = ACADEMIC_SEMESTER_TAG,
    params(
        ("id" = String, Path, description = "Academic semester ID")
    ),
    request_body = UpdateAcademicSemesterDto,
    responses(
        (status = 200, description = "Academic semester updated", body = AcademicSemesterDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "Academic semester not found", body = ErrorDto),
        (status = 409, description = "Semester already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_semester(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidatedJson(payload): ValidatedJson<UpdateAcademicSemesterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicSemesterService::new(&state.db);

    let semester = service.update(id, payload.into()).await?;

    Ok(build_success(
        StatusCode::OK,
        "Academic semester updated successfully!",
        Some(semester.into_dto()),
        None,
    ))
}

/// Delete an academic semester.
///
/// # Returns
/// - `200 OK` - The deleted semester
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No semester with that ID
#[utoipa::path(
    delete,
    path = "/api/v1/academic-semesters/{id}",
    tag = ACADEMIC_SEMESTER_TAG,
    params(
        ("id" = String, Path, description = "Academic semester ID")
    ),
    responses(
        (status = 200, description = "Academic semester deleted", body = AcademicSemesterDto),
        (status = 400, description = "Malformed ID", body = ErrorDto),
        (status = 404, description = "Academic semester not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_semester(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicSemesterService::new(&state.db);

    let semester = service.delete(id).await?;

    Ok(build_success(
        StatusCode::OK,
        "Academic semester deleted successfully!",
        Some(semester.into_dto()),
        None,
    ))
}
