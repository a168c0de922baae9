//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules spanning more than one field or document
//! - **Data Layer** (`data/`) - Document validation, database operations and entity conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Schema** (`schema/`) - Declarative request-body schemas
//! - **Error Layer** (`error/`) - Error types, classification and normalization
//! - **Middleware** (`middleware/`) - Async boundary, terminal handler and body extractor
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection and tracing initialization
//! - **Lifecycle** (`lifecycle`) - Listener, signal handling and graceful shutdown
//! - **Router** (`router`) - Route table, middleware stack and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** routes the request; unknown paths fall back to a 404 failure
//! 2. **Extractors** validate the body against its schema and parse path identifiers
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** applies business rules and calls repositories
//! 5. **Data** validates documents and queries the database
//! 6. **Controller** wraps the result in the success envelope
//!
//! Any failure along the way, returned or panicked, is delivered to the terminal
//! handler, which writes the one failure envelope the client sees.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod lifecycle;
pub mod middleware;
pub mod model;
pub mod response;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
