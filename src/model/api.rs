use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single offending-field report.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct FieldErrorDto {
    pub path: String,
    pub message: String,
}

impl FieldErrorDto {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Failure envelope returned for every request that did not succeed.
///
/// `stack` is only populated outside of production.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
    pub error_messages: Vec<FieldErrorDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Success envelope wrapping an optional payload and optional pagination metadata.
///
/// Absent `meta` and `data` are omitted from the JSON entirely rather than sent as `null`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Pagination metadata attached to list results.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetaDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_page: u64,
}
