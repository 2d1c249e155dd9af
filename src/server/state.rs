//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT settings for issuing and verifying bearer tokens
//! - Directory where the schedule PDF is stored

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::config::JwtConfig;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// configuration values sit behind `Arc`. No field is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Token signing secret, issuer and lifetime.
    pub jwt: Arc<JwtConfig>,

    /// Directory holding uploaded files.
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token settings
    /// - `upload_dir` - Directory for the schedule PDF
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtConfig, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
            upload_dir: Arc::new(upload_dir.into()),
        }
    }
}
