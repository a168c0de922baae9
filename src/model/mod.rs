//! Wire-level DTOs shared by every endpoint.
//!
//! These types define exactly what goes over HTTP: the response envelopes and the
//! per-resource payloads. Server-side domain models live in `server::model` and are
//! converted into these at the controller boundary.

pub mod academic_semester;
pub mod api;
pub mod user;
