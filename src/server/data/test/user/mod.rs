use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::InsertUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_id;
mod find_last_user_id;

fn insert_param(user_id: &str, role: Option<&str>) -> InsertUserParam {
    InsertUserParam {
        user_id: user_id.to_string(),
        role: role.map(str::to_string),
        password: "password".to_string(),
    }
}
