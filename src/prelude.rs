//! Convenience re-exports for common Stayhaus usage
//!
//! This prelude module re-exports the most commonly used items, making it
//! easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use stayhaus::prelude::*;
//! ```

// Core components
pub use crate::core::Stayhaus;
pub use crate::errors::StayhausError;
pub use crate::executor::{DbPool, PlanExecutor};

// Row types
pub use crate::models::{
    GuestReservation, NewProperty, NewUser, Property, PropertyListing, Reservation, User,
};

// Query building
pub use crate::query_builder::{
    build_property_search, PropertyFilter, QueryPlan, DEFAULT_RESULT_LIMIT,
};

// Stores
pub use crate::stores::{PropertyStore, ReservationStore, UserStore};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Common external dependencies
pub use anyhow;
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::json;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{FromRow, PgPool, Row};
