//! Typed stores over the rental schema

use serde_json::json;
use sqlx::FromRow;

use crate::errors::StayhausError;
use crate::executor::{DbPool, PlanExecutor};
use crate::models::{NewProperty, Property, PropertyListing};
use crate::query_builder::{build_property_search, PropertyFilter, QueryPlan};

pub(crate) const PROPERTY_CREATE_SQL: &str = "INSERT INTO properties (\
     title, description, number_of_bedrooms, number_of_bathrooms, \
     parking_spaces, cost_per_night, thumbnail_photo_url, cover_photo_url, \
     street, country, city, province, post_code, owner_id) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
     RETURNING *";

/// Property search and listing creation
#[derive(Clone)]
pub struct PropertyStore {
    db_pool: DbPool,
}

impl PropertyStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    /// Search properties by the given filter, annotated with each property's
    /// average review rating and ordered by nightly cost.
    ///
    /// An empty filter returns the unfiltered listing; `limit` defaults
    /// to 10.
    pub async fn search(
        &self,
        filter: &PropertyFilter,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, StayhausError> {
        let plan = build_property_search(filter, limit);

        let rows = self
            .db_pool
            .fetch_rows(&plan)
            .await
            .map_err(|e| StayhausError::query_execution("properties", "search", e))?;

        rows.iter()
            .map(PropertyListing::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StayhausError::query_execution("properties", "search", e))
    }

    /// Insert a property and return the stored row
    pub async fn create(&self, property: NewProperty) -> Result<Property, StayhausError> {
        let plan = QueryPlan::new(
            PROPERTY_CREATE_SQL,
            vec![
                json!(property.title),
                json!(property.description),
                json!(property.number_of_bedrooms),
                json!(property.number_of_bathrooms),
                json!(property.parking_spaces),
                json!(property.cost_per_night),
                json!(property.thumbnail_photo_url),
                json!(property.cover_photo_url),
                json!(property.street),
                json!(property.country),
                json!(property.city),
                json!(property.province),
                json!(property.post_code),
                json!(property.owner_id),
            ],
        );

        let rows = self
            .db_pool
            .fetch_rows(&plan)
            .await
            .map_err(|e| StayhausError::query_execution("properties", "create", e))?;

        rows.first()
            .ok_or(sqlx::Error::RowNotFound)
            .and_then(Property::from_row)
            .map_err(|e| StayhausError::query_execution("properties", "create", e))
    }
}
