//! Declarative request-body schemas.
//!
//! A schema is checked against the raw JSON body before deserialization and reports
//! every violation as an `Issue` whose path starts at `body`, e.g. `body.title`.
//! Refinements (cross-field rules) only run once every field of their object passed.

pub mod academic_semester;
pub mod user;

use serde_json::{Map, Value};

use crate::server::error::shape::{Issue, PathSegment, SchemaError};

/// Implemented by request DTOs that are extracted through `ValidatedJson`.
pub trait RequestSchema {
    fn schema() -> ObjectSchema;
}

/// Constraint on a single JSON value.
pub enum Rule {
    String,
    Integer,
    OneOf(&'static [&'static str]),
    Object(ObjectSchema),
}

struct Field {
    name: &'static str,
    rule: Rule,
    /// Message reported when the field is absent; `None` marks the field optional.
    required: Option<&'static str>,
}

struct Refinement {
    message: &'static str,
    holds: fn(&Map<String, Value>) -> bool,
}

/// Schema of a JSON object.
#[derive(Default)]
pub struct ObjectSchema {
    fields: Vec<Field>,
    refinements: Vec<Refinement>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &'static str, rule: Rule, message: &'static str) -> Self {
        self.fields.push(Field {
            name,
            rule,
            required: Some(message),
        });
        self
    }

    pub fn optional(mut self, name: &'static str, rule: Rule) -> Self {
        self.fields.push(Field {
            name,
            rule,
            required: None,
        });
        self
    }

    /// Adds a cross-field rule reported at the object's own path.
    pub fn refine(mut self, holds: fn(&Map<String, Value>) -> bool, message: &'static str) -> Self {
        self.refinements.push(Refinement { message, holds });
        self
    }

    /// Validates a request body, rooting issue paths at `body`.
    pub fn validate_body(&self, body: &Value) -> Result<(), SchemaError> {
        let mut issues = Vec::new();
        let mut path = vec![PathSegment::from("body")];

        self.check(body, &mut path, &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(SchemaError { issues })
        }
    }

    fn check(&self, value: &Value, path: &mut Vec<PathSegment>, issues: &mut Vec<Issue>) {
        let Some(object) = value.as_object() else {
            issues.push(Issue::new(
                path.clone(),
                format!("Expected object, received {}", type_name(value)),
            ));
            return;
        };

        let before = issues.len();

        for field in &self.fields {
            path.push(PathSegment::from(field.name));

            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if let Some(message) = field.required {
                        issues.push(Issue::new(path.clone(), message));
                    }
                }
                Some(value) => field.rule.check(value, path, issues),
            }

            path.pop();
        }

        if issues.len() == before {
            for refinement in &self.refinements {
                if !(refinement.holds)(object) {
                    issues.push(Issue::new(path.clone(), refinement.message));
                }
            }
        }
    }
}

impl Rule {
    fn check(&self, value: &Value, path: &mut Vec<PathSegment>, issues: &mut Vec<Issue>) {
        match self {
            Self::String => {
                if !value.is_string() {
                    issues.push(Issue::new(
                        path.clone(),
                        format!("Expected string, received {}", type_name(value)),
                    ));
                }
            }
            Self::Integer => match value {
                Value::Number(number) if number.is_f64() => {
                    issues.push(Issue::new(path.clone(), "Expected integer, received float"))
                }
                Value::Number(number) => {
                    // Integers beyond i64 parse as u64 and are out of range as well.
                    let fits = number.as_i64().is_some_and(|n| i32::try_from(n).is_ok());
                    if !fits {
                        issues.push(Issue::new(path.clone(), "Number is out of range"));
                    }
                }
                other => issues.push(Issue::new(
                    path.clone(),
                    format!("Expected number, received {}", type_name(other)),
                )),
            },
            Self::OneOf(allowed) => {
                let expected = allowed
                    .iter()
                    .map(|option| format!("'{option}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");

                match value.as_str() {
                    Some(text) if allowed.iter().any(|option| *option == text) => {}
                    Some(text) => issues.push(Issue::new(
                        path.clone(),
                        format!("Invalid enum value. Expected {expected}, received '{text}'"),
                    )),
                    None => issues.push(Issue::new(
                        path.clone(),
                        format!("Expected {expected}, received {}", type_name(value)),
                    )),
                }
            }
            Self::Object(schema) => schema.check(value, path, issues),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
