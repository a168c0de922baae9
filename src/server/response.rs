//! Response envelope builder.
//!
//! Every outcome leaves the server in one of two shapes: `ResponseDto` for successes
//! and `ErrorDto` for failures. Controllers only ever build the success side; the
//! failure side is built by the terminal handler from a `NormalizedFailure`.

use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    model::api::{ErrorDto, MetaDto, ResponseDto},
    server::error::{convert::NormalizedFailure, AppError},
};

/// A success envelope together with the status code it is sent with.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status_code: StatusCode,
    body: ResponseDto<T>,
}

impl<T> ApiResponse<T> {
    pub fn body(&self) -> &ResponseDto<T> {
        &self.body
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Builds a success envelope.
///
/// `data` and `meta` are left out of the JSON when `None`.
pub fn build_success<T>(
    status_code: StatusCode,
    message: impl Into<String>,
    data: Option<T>,
    meta: Option<MetaDto>,
) -> ApiResponse<T> {
    ApiResponse {
        status_code,
        body: ResponseDto {
            success: true,
            status_code: status_code.as_u16(),
            message: message.into(),
            meta,
            data,
        },
    }
}

/// Builds a failure envelope from a normalized failure.
///
/// The stack is rendered from `raw` only when `include_stack` is set.
pub fn build_failure(
    normalized: &NormalizedFailure,
    include_stack: bool,
    raw: &AppError,
) -> ErrorDto {
    ErrorDto {
        success: false,
        message: normalized.message.clone(),
        error_messages: normalized.field_errors.clone(),
        stack: include_stack.then(|| render_stack(raw)),
    }
}

/// Renders the failure's debug form followed by its `source()` chain.
fn render_stack(raw: &AppError) -> String {
    let mut stack = format!("{raw}\n    at {raw:?}");

    let mut source = raw.source();
    while let Some(cause) = source {
        stack.push_str(&format!("\n    caused by: {cause}"));
        source = cause.source();
    }

    stack
}
