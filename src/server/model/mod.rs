//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types describe the input
//! of a single service or repository operation.

pub mod academic_semester;
pub mod user;
