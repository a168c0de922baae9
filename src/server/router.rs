use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        academic_semester::{
            AcademicSemesterDto, CreateAcademicSemesterDto, UpdateAcademicSemesterDto,
        },
        api::{ErrorDto, FieldErrorDto, MetaDto},
        user::{CreateUserDto, UserDto, UserInputDto},
    },
    server::{
        controller::{
            academic_semester::{
                self, create_semester, delete_semester, get_all_semesters, get_semester,
                update_semester,
            },
            user::{self, create_user},
        },
        error::{api::ApiError, AppError},
        middleware::{boundary::async_boundary, terminal::terminal_handler},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::create_user,
        academic_semester::create_semester,
        academic_semester::get_all_semesters,
        academic_semester::get_semester,
        academic_semester::update_semester,
        academic_semester::delete_semester,
    ),
    components(schemas(
        AcademicSemesterDto,
        CreateAcademicSemesterDto,
        UpdateAcademicSemesterDto,
        CreateUserDto,
        UserInputDto,
        UserDto,
        ErrorDto,
        FieldErrorDto,
        MetaDto,
    )),
    tags(
        (name = "user", description = "User registration"),
        (name = "academic-semester", description = "Academic semester management"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Layers run outermost first: CORS, then the terminal handler that renders every
/// delivered failure, then the async boundary catching handler panics.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(from_fn(async_boundary))
        .layer(from_fn_with_state(state.config.clone(), terminal_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users/create-user", post(create_user))
        .route("/academic-semesters/create-semester", post(create_semester))
        .route("/academic-semesters", get(get_all_semesters))
        .route(
            "/academic-semesters/{id}",
            get(get_semester)
                .patch(update_semester)
                .delete(delete_semester),
        )
}

async fn not_found() -> AppError {
    ApiError::not_found("API Not Found").into()
}
