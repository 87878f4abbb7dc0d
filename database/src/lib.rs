//! Persistence layer for Keygate.
//!
//! Repository-pattern access to the users table, plus an in-memory store
//! with the same contract.

pub mod config;
pub mod error;
pub mod repositories;

// Re-export commonly used items
pub use sqlx;
pub use config::DatabaseConfig;
pub use error::{StoreError, UniqueField};
pub use repositories::{InMemoryUserStore, UserRepository, UserStore};

use sqlx::{PgPool, postgres::PgPoolOptions};
use anyhow::{Result, Context};

/// Database connection manager
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database instance from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run migrations")?;
        Ok(())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }
}
