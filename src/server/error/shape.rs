//! Structured failures raised by the persistence and request-schema layers.
//!
//! Each type carries the structure the classifier discriminates on: a single offending
//! path for identifier casts, a field map for document validation and an ordered issue
//! list for request-schema validation.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

/// A value could not be coerced into the identifier type expected at `path`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cast to {kind} failed for value \"{value}\" at path \"{path}\"")]
pub struct CastError {
    pub path: String,
    pub value: String,
    pub kind: &'static str,
}

impl CastError {
    pub fn new(path: impl Into<String>, value: impl Into<String>, kind: &'static str) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
            kind,
        }
    }
}

/// One field rejected by document validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub path: String,
    pub message: String,
}

/// Document validation failed on one or more fields before a write reached the store.
///
/// Fields keep the order in which the validator reported them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("Validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: IndexMap<String, FieldFailure>,
}

fn summarize(errors: &IndexMap<String, FieldFailure>) -> String {
    errors
        .iter()
        .map(|(field, failure)| format!("{field}: {}", failure.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A segment of a request-schema issue path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single request-schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl Issue {
    pub fn new(path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

/// The request body did not satisfy the endpoint's schema.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("Request schema validation failed with {} issue(s)", .issues.len())]
pub struct SchemaError {
    pub issues: Vec<Issue>,
}
