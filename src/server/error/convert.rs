//! Kind converters.
//!
//! Each converter maps a classified failure to a `NormalizedFailure`. They are pure and
//! return `None` on input they cannot represent, which the classifier turns into the
//! generic shape.

use axum::http::StatusCode;

use crate::{model::api::FieldErrorDto, server::error::classify::FailureShape};

pub const GENERIC_MESSAGE: &str = "Something went wrong";

/// Output of every converter: what the failure envelope is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFailure {
    pub status_code: StatusCode,
    pub message: String,
    pub field_errors: Vec<FieldErrorDto>,
}

pub fn cast(failure: &dyn FailureShape) -> Option<NormalizedFailure> {
    let path = failure.cast_path().filter(|path| !path.is_empty())?;

    Some(NormalizedFailure {
        status_code: StatusCode::BAD_REQUEST,
        message: "cast Error".to_string(),
        field_errors: vec![FieldErrorDto::new(path, "invalid id")],
    })
}

pub fn document_validation(failure: &dyn FailureShape) -> Option<NormalizedFailure> {
    let fields = failure.field_failures().filter(|fields| !fields.is_empty())?;

    let field_errors = fields
        .values()
        .map(|field| FieldErrorDto::new(field.path.as_str(), field.message.as_str()))
        .collect();

    Some(NormalizedFailure {
        status_code: StatusCode::BAD_REQUEST,
        message: "validation Error".to_string(),
        field_errors,
    })
}

pub fn schema_validation(failure: &dyn FailureShape) -> Option<NormalizedFailure> {
    let issues = failure.issues().filter(|issues| !issues.is_empty())?;

    let field_errors = issues
        .iter()
        .map(|issue| {
            let path = issue
                .path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(".");
            FieldErrorDto::new(path, issue.message.as_str())
        })
        .collect();

    Some(NormalizedFailure {
        status_code: StatusCode::BAD_REQUEST,
        message: "Validation Error".to_string(),
        field_errors,
    })
}

/// Pass-through for explicit application failures: the status code and message are
/// the caller's own.
pub fn application(failure: &dyn FailureShape) -> Option<NormalizedFailure> {
    let status_code = failure
        .status_code()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|code| code.is_client_error() || code.is_server_error())?;

    Some(NormalizedFailure {
        status_code,
        message: message_or_default(failure),
        field_errors: Vec::new(),
    })
}

pub fn generic(failure: &dyn FailureShape) -> NormalizedFailure {
    NormalizedFailure {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: message_or_default(failure),
        field_errors: Vec::new(),
    }
}

fn message_or_default(failure: &dyn FailureShape) -> String {
    failure
        .message()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_MESSAGE.to_string())
}
