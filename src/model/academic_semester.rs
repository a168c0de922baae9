use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcademicSemesterDto {
    pub title: String,
    pub year: i32,
    pub code: String,
    pub start_month: String,
    pub end_month: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcademicSemesterDto {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub code: Option<String>,
    pub start_month: Option<String>,
    pub end_month: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSemesterDto {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub code: String,
    pub start_month: String,
    pub end_month: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
