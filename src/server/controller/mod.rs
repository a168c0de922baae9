//! HTTP request handlers.
//!
//! Controllers extract and validate input, convert DTOs into parameter types, call the
//! service layer and wrap results in the success envelope. Failures are returned as
//! `AppError` and rendered by the terminal handler.

pub mod academic_semester;
pub mod param;
pub mod user;
