//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token keys for issuing and verifying admin tokens
//! - Application configuration

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{config::Config, service::auth::token::JwtKeys};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<JwtKeys>` and `Arc<Config>` are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 keys derived from `JWT_SECRET`.
    ///
    /// Used by the login flow to sign tokens and by `AuthGuard` to verify them.
    pub jwt: Arc<JwtKeys>,

    /// Configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration; the token keys are derived from its secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            jwt: Arc::new(JwtKeys::new(&config.jwt_secret)),
            config: Arc::new(config),
        }
    }
}
