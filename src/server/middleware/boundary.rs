//! Async boundary wrapper.
//!
//! Handlers fail in two ways: they return `Err(AppError)` from their future, which
//! axum already turns into a delivered failure, or they panic while running. The
//! boundary catches the second kind so it is delivered to the terminal handler like
//! any other failure instead of tearing down the connection.

use std::{future::Future, panic::AssertUnwindSafe};

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;

use crate::server::error::AppError;

/// Awaits `operation`, capturing a panic raised while it runs as a failure.
///
/// # Returns
/// - `Ok(T)` - The operation completed successfully
/// - `Err(AppError)` - The operation returned an error or panicked
pub async fn catch_async<F, T>(operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match AssertUnwindSafe(operation).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(AppError::from_panic(payload)),
    }
}

/// Middleware wrapping every downstream handler in `catch_async`.
///
/// Performs no classification; a captured failure is delivered to the terminal
/// handler unchanged.
pub async fn async_boundary(request: Request, next: Next) -> Response {
    let uri = request.uri().clone();

    match catch_async(async move { Ok(next.run(request).await) }).await {
        Ok(response) => response,
        Err(failure) => {
            tracing::warn!(%uri, "handler panicked: {}", failure);
            failure.into_response()
        }
    }
}
