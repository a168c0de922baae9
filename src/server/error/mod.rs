//! Error types and the failure-normalization pipeline.
//!
//! `AppError` is the single error type returned by controllers, services and
//! repositories. It never renders itself: `IntoResponse` hands the error to the
//! terminal handler (`middleware::terminal`), which classifies it, converts it into a
//! `NormalizedFailure` and writes the failure envelope. Every failure therefore
//! reaches the client in the same shape no matter where it was raised.

pub mod api;
pub mod classify;
pub mod config;
pub mod convert;
pub mod internal;
pub mod shape;

use std::any::Any;

use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use thiserror::Error;

use crate::server::{
    error::{
        api::ApiError,
        classify::FailureShape,
        config::ConfigError,
        internal::InternalError,
        shape::{CastError, FieldFailure, Issue, SchemaError, ValidationError},
    },
    middleware::terminal::FailureSlot,
};

/// Top-level application error type.
///
/// Variants are assigned where the kind of failure is known for certain: the
/// persistence layer raises `Validation`, identifier parsing raises `Cast`, request
/// extractors raise `Schema`, business logic raises `Api`. Everything else is an
/// unclassified failure and ends up as a 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Broken internal invariant.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Malformed identifier supplied by the client.
    #[error(transparent)]
    CastErr(#[from] CastError),

    /// Document validation failure from the persistence layer.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Request body rejected by its schema before the handler ran.
    #[error(transparent)]
    SchemaErr(#[from] SchemaError),

    /// Explicit failure with an intentional status code.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// A handler panicked with a non-`AppError` payload.
    ///
    /// Holds the panic message, empty when the payload was not text.
    #[error("{0}")]
    Panic(String),
}

impl AppError {
    /// Recovers a failure from a caught panic payload.
    ///
    /// A payload raised with `std::panic::panic_any(app_error)` is returned as-is so a
    /// panicking handler reports exactly what an `Err` return would have.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<AppError>() {
            Ok(err) => return *err,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<ApiError>() {
            Ok(err) => return AppError::ApiErr(*err),
            Err(payload) => payload,
        };

        if let Some(message) = payload.downcast_ref::<&'static str>() {
            return AppError::Panic((*message).to_string());
        }
        match payload.downcast::<String>() {
            Ok(message) => AppError::Panic(*message),
            Err(_) => AppError::Panic(String::new()),
        }
    }

    /// Whether a write was rejected by a unique index.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::DbErr(err) => matches!(
                err.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ),
            _ => false,
        }
    }
}

impl FailureShape for AppError {
    fn cast_path(&self) -> Option<&str> {
        match self {
            Self::CastErr(err) => Some(&err.path),
            _ => None,
        }
    }

    fn field_failures(&self) -> Option<&IndexMap<String, FieldFailure>> {
        match self {
            Self::ValidationErr(err) => Some(&err.errors),
            _ => None,
        }
    }

    fn issues(&self) -> Option<&[Issue]> {
        match self {
            Self::SchemaErr(err) => Some(&err.issues),
            _ => None,
        }
    }

    fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiErr(err) => Some(err.status_code.as_u16()),
            _ => None,
        }
    }

    fn message(&self) -> Option<String> {
        Some(self.to_string()).filter(|message| !message.trim().is_empty())
    }
}

/// Delivers the error to the terminal handler.
///
/// The returned response is a placeholder carrying the error in its extensions; the
/// terminal handler replaces it with the failure envelope.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        FailureSlot::deliver(self)
    }
}
