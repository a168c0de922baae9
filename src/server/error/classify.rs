//! Failure classification.
//!
//! Failures are inspected only through their structural discriminants
//! (`FailureShape`) and matched against an ordered chain of predicate → converter
//! pairs. The first matching predicate wins, so a failure that happens to satisfy
//! several discriminants is still resolved deterministically.

use indexmap::IndexMap;

use crate::server::error::{
    convert::{self, NormalizedFailure},
    shape::{FieldFailure, Issue},
};

/// The structural view of a failure the classifier works with.
///
/// Every accessor defaults to "not present"; a failure exposes only the structure it
/// actually carries.
pub trait FailureShape {
    /// Offending field path of an identifier / type coercion failure.
    fn cast_path(&self) -> Option<&str> {
        None
    }

    /// Field name → per-field failure reported by document validation.
    fn field_failures(&self) -> Option<&IndexMap<String, FieldFailure>> {
        None
    }

    /// Ordered request-schema issues.
    fn issues(&self) -> Option<&[Issue]> {
        None
    }

    /// Status code attached on purpose by application code.
    fn status_code(&self) -> Option<u16> {
        None
    }

    /// Human readable message, if the failure has one.
    fn message(&self) -> Option<String> {
        None
    }
}

/// The five classification buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Cast,
    DocumentValidation,
    SchemaValidation,
    Application,
    Generic,
}

type Predicate = fn(&dyn FailureShape) -> bool;
type Converter = fn(&dyn FailureShape) -> Option<NormalizedFailure>;

/// Classification chain in priority order. Cast comes first because a cast failure
/// is the more specific shape of a single-field validation failure.
const CHAIN: [(ErrorKind, Predicate, Converter); 4] = [
    (ErrorKind::Cast, is_cast, convert::cast),
    (
        ErrorKind::DocumentValidation,
        is_document_validation,
        convert::document_validation,
    ),
    (
        ErrorKind::SchemaValidation,
        is_schema_validation,
        convert::schema_validation,
    ),
    (ErrorKind::Application, is_application, convert::application),
];

fn is_cast(failure: &dyn FailureShape) -> bool {
    failure.cast_path().is_some()
}

fn is_document_validation(failure: &dyn FailureShape) -> bool {
    failure.field_failures().is_some()
}

fn is_schema_validation(failure: &dyn FailureShape) -> bool {
    failure.issues().is_some()
}

fn is_application(failure: &dyn FailureShape) -> bool {
    failure.status_code().is_some()
}

/// Assigns a failure to its kind.
pub fn classify(failure: &dyn FailureShape) -> ErrorKind {
    CHAIN
        .iter()
        .find(|(_, matches, _)| matches(failure))
        .map_or(ErrorKind::Generic, |(kind, _, _)| *kind)
}

/// Classifies and converts a failure in one pass.
///
/// A converter that rejects its input (empty path, empty field map, ...) degrades the
/// failure to the generic shape; this never fails.
pub fn normalize(failure: &dyn FailureShape) -> NormalizedFailure {
    CHAIN
        .iter()
        .find(|(_, matches, _)| matches(failure))
        .and_then(|(_, _, convert)| convert(failure))
        .unwrap_or_else(|| convert::generic(failure))
}
