//! Core Stayhaus functionality
//!
//! This module contains the main Stayhaus struct, which owns the connection
//! pool and hands out the typed stores.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::errors::StayhausError;
use crate::executor::DbPool;
use crate::stores::{PropertyStore, ReservationStore, UserStore};
use config::DatabaseConfig;

/// Main coordinator that manages the database connection pool
pub struct Stayhaus {
    pool: DbPool,
}

impl Stayhaus {
    /// Create new Stayhaus with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, StayhausError> {
        let connection_string = config.connection_string();

        let mut pool_options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self { pool })
    }

    /// Get database pool reference
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// User lookup and registration
    pub fn users(&self) -> UserStore {
        UserStore::new(self.pool.clone())
    }

    /// Property search and listing creation
    pub fn properties(&self) -> PropertyStore {
        PropertyStore::new(self.pool.clone())
    }

    /// Reservation listing
    pub fn reservations(&self) -> ReservationStore {
        ReservationStore::new(self.pool.clone())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), StayhausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
