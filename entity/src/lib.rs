//! SeaORM entity models for the campus database.

pub mod prelude;

pub mod academic_semester;
pub mod user;
