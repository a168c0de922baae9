use crate::server::{
    data::academic_semester::AcademicSemesterRepository,
    error::AppError,
    model::academic_semester::{
        AcademicSemesterFilter, CreateAcademicSemesterParam, PaginationOptions, SortField,
        SortOrder, UpdateAcademicSemesterParam,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_by_id;
mod find_by_title_and_year;
mod get_paginated;
mod update;

fn create_param(title: &str, year: i32, code: &str) -> CreateAcademicSemesterParam {
    CreateAcademicSemesterParam {
        title: title.to_string(),
        year,
        code: code.to_string(),
        start_month: "January".to_string(),
        end_month: "June".to_string(),
    }
}
