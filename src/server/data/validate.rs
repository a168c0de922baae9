//! Document validation run by repositories before any write reaches the database.

use indexmap::IndexMap;

use crate::server::error::shape::{FieldFailure, ValidationError};

/// Collects per-field failures for one document.
///
/// Only the first failure of each field is kept, and fields are reported in the order
/// their rules were declared.
#[derive(Debug, Default)]
pub struct DocumentValidator {
    errors: IndexMap<String, FieldFailure>,
}

impl DocumentValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails `path` when the value is absent or blank.
    pub fn required(mut self, path: &str, value: Option<&str>, message: &str) -> Self {
        if value.map_or(true, |value| value.trim().is_empty()) {
            self.reject(path, message.to_string());
        }
        self
    }

    /// Fails `path` when a present value is outside `allowed`.
    pub fn one_of(mut self, path: &str, value: Option<&str>, allowed: &[&str]) -> Self {
        if let Some(value) = value {
            if !allowed.iter().any(|option| *option == value) {
                self.reject(
                    path,
                    format!("`{value}` is not a valid enum value for path `{path}`."),
                );
            }
        }
        self
    }

    /// Fails `path` with `message` unless `holds` is true.
    pub fn check(mut self, path: &str, holds: bool, message: &str) -> Self {
        if !holds {
            self.reject(path, message.to_string());
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }

    fn reject(&mut self, path: &str, message: String) {
        self.errors
            .entry(path.to_string())
            .or_insert_with(|| FieldFailure {
                path: path.to_string(),
                message,
            });
    }
}
