//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! and dependencies needed by request handlers. The state is initialized once
//! during startup and then cloned for each request handler through Axum's
//! state extraction.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Token signing configuration used to issue and validate bearer tokens.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing and validating JWTs.
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_seconds: i64,
}

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types: `DatabaseConnection` is a connection
/// pool (clones share the pool), the rest are plain owned values cloned per
/// request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Bearer-token signing configuration.
    pub auth: AuthConfig,

    /// Directory under which uploaded media assets are stored.
    pub media_root: PathBuf,
}

impl AppState {
    /// Creates the application state from the loaded configuration and an
    /// established database connection.
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            auth: AuthConfig {
                secret: config.jwt_secret.clone(),
                token_ttl_seconds: config.token_ttl_seconds,
            },
            media_root: PathBuf::from(&config.media_root),
        }
    }
}
