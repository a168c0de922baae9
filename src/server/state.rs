//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through axum's
//! state extraction. Both fields are cheap to clone: the connection is a pool handle
//! and the configuration sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Read-only configuration loaded from the environment.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
