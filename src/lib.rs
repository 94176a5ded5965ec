//! # Stayhaus
//!
//! PostgreSQL data-access layer for the Stayhaus property-rental web
//! application: typed stores over the `users`, `properties`, `reservations`
//! and `property_reviews` tables, plus a pure query-construction core for
//! the filtered property search.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stayhaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "stayhaus".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let stayhaus = Stayhaus::new(config).await?;
//!     stayhaus.health_check().await?;
//!
//!     let filter = PropertyFilter::new()
//!         .with_city("Vancouver")
//!         .with_minimum_rating(4.0);
//!
//!     let listings = stayhaus.properties().search(&filter, Some(20)).await?;
//!     for listing in listings {
//!         println!(
//!             "{} — {} cents/night (avg rating {:.2})",
//!             listing.property.title, listing.property.cost_per_night,
//!             listing.average_rating,
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod executor;
pub mod models;
pub mod prelude;
pub mod query_builder;
pub mod stores;

// Re-export the main public types for convenience
pub use crate::core::Stayhaus;
pub use crate::errors::StayhausError;
pub use crate::executor::{DbPool, PlanExecutor};
pub use crate::query_builder::{
    build_property_search, PropertyFilter, QueryPlan, DEFAULT_RESULT_LIMIT,
};
pub use crate::stores::{PropertyStore, ReservationStore, UserStore};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
