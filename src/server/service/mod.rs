//! Business logic layer.
//!
//! Services sit between controllers and repositories. They work with domain models and
//! parameter types, enforce the rules that span more than one document and raise
//! `ApiError`s with the status code the client should see.

pub mod academic_semester;
pub mod user;
