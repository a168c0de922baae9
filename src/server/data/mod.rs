//! Database repository layer.
//!
//! Repositories run document validation before writes, perform the SeaORM queries and
//! convert entity models into domain models at the boundary.

pub mod academic_semester;
pub mod user;
pub mod validate;

#[cfg(test)]
mod test;
