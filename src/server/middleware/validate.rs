//! Schema-validated JSON body extractor.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::{
    error::{
        api::ApiError,
        shape::{Issue, SchemaError},
        AppError,
    },
    schema::RequestSchema,
};

/// JSON body that has passed its request schema.
///
/// The raw body is checked against `T::schema()` before being deserialized, so every
/// offending field is reported at once instead of stopping at the first serde error.
/// A body that is not JSON at all is rejected with the body parser's own status code.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequestSchema,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(body_parse_failure)?;

        T::schema().validate_body(&body)?;

        let payload = serde_json::from_value(body).map_err(|err| SchemaError {
            issues: vec![Issue::new(vec!["body".into()], err.to_string())],
        })?;

        Ok(Self(payload))
    }
}

fn body_parse_failure(rejection: JsonRejection) -> ApiError {
    ApiError::new(rejection.status(), rejection.body_text())
}
