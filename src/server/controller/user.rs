use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError, middleware::validate::ValidatedJson, model::user::CreateUserParam,
        response::build_success, service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Generates the next incremental user ID and stores the user with the provided role.
/// When no password is given the configured default password is used. The password is
/// never part of the response.
///
/// # Arguments
/// - `state` - Application state containing the database connection and configuration
/// - `payload` - `{ "user": { "role", "password"? } }`
///
/// # Returns
/// - `200 OK` - User created
/// - `400 Bad Request` - Body failed its schema or the role is missing or unknown
/// - `409 Conflict` - The generated user ID is already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/users/create-user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created successfully", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .create(
            CreateUserParam::from(payload.user),
            &state.config.default_user_pass,
        )
        .await?;

    Ok(build_success(
        StatusCode::OK,
        "user created successfully!",
        Some(user.into_dto()),
        None,
    ))
}
