//! Path and query extractors that report failures through the error pipeline.

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::server::{error::api::ApiError, error::AppError, util::parse::parse_object_id};

/// The `{id}` path segment parsed as a document identifier.
///
/// A segment that is not a well formed identifier is rejected as a cast failure on
/// path `id`.
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub Uuid);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

        Ok(Self(parse_object_id("id", &raw)?))
    }
}

/// Query string deserialized into `T`; malformed queries become an `ApiError`.
#[derive(Debug, Clone)]
pub struct QueryParam<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

        Ok(Self(value))
    }
}
