//! Pipeline terminal handler.
//!
//! The single place failures are resolved. `AppError::into_response` does not render
//! anything itself; it parks the error in a `FailureSlot` on a placeholder response.
//! This middleware, installed outermost, picks the slot up and drives
//! classify → convert → envelope → write.
//!
//! Per request the handler is in one of two states: `Dispatch` while a delivered
//! failure is waiting in the slot, `Responded` once the slot has been taken. Taking is
//! destructive, so a failure is written at most once even if the terminal runs again
//! over the same response.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    config::Config,
    error::{
        classify::{classify, normalize},
        AppError,
    },
    response::build_failure,
};

/// Carries a delivered failure from the point it was raised to the terminal handler.
#[derive(Clone)]
pub struct FailureSlot(Arc<Mutex<Option<AppError>>>);

impl FailureSlot {
    /// Delivers a failure to the terminal handler.
    ///
    /// # Returns
    /// A placeholder 500 response holding the failure in its extensions
    pub fn deliver(failure: AppError) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response
            .extensions_mut()
            .insert(Self(Arc::new(Mutex::new(Some(failure)))));
        response
    }

    /// Takes the failure out of the slot, leaving it empty.
    fn take(&self) -> Option<AppError> {
        self.0.lock().ok()?.take()
    }
}

/// Middleware entry point; must be the outermost layer of the API router.
pub async fn terminal_handler(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    respond(response, !config.is_production())
}

/// Writes the failure envelope for a response carrying an undelivered failure.
///
/// Success responses, and responses whose failure was already written, are returned
/// unchanged.
///
/// # Arguments
/// - `response` - Response produced by the rest of the chain
/// - `include_stack` - Whether the failure envelope carries a stack
pub fn respond(mut response: Response, include_stack: bool) -> Response {
    let Some(failure) = response
        .extensions_mut()
        .remove::<FailureSlot>()
        .and_then(|slot| slot.take())
    else {
        return response;
    };

    let kind = classify(&failure);
    let normalized = normalize(&failure);

    if normalized.status_code.is_server_error() {
        tracing::error!(?kind, status = %normalized.status_code, "{}", failure);
    } else {
        tracing::debug!(?kind, status = %normalized.status_code, "{}", failure);
    }

    let envelope = build_failure(&normalized, include_stack, &failure);

    (normalized.status_code, Json(envelope)).into_response()
}
