//! Application state shared by the bot event handler and the scheduler.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared resources of the running bot.
///
/// Cheap to clone: `DatabaseConnection` is a pool handle and the configuration
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the application state once the database is connected and migrated.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Loaded application configuration
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
