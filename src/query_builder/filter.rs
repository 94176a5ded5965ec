//! Search query construction

use serde::{Deserialize, Serialize};

/// Optional predicates for the property search.
///
/// A present field means "apply this predicate", an absent field means "skip
/// it". There are no sentinel defaults; callers omit unwanted filters.
/// Prices are in minor currency units (cents per night), ratings are on the
/// 1–5 review scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub owner_id: Option<i32>,
    pub city: Option<String>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to properties of a single owner
    pub fn with_owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Restrict to cities containing the given text (substring match)
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Inclusive lower bound on nightly cost, in cents
    pub fn with_minimum_price_per_night(mut self, cents: i32) -> Self {
        self.minimum_price_per_night = Some(cents);
        self
    }

    /// Inclusive upper bound on nightly cost, in cents
    pub fn with_maximum_price_per_night(mut self, cents: i32) -> Self {
        self.maximum_price_per_night = Some(cents);
        self
    }

    /// Inclusive lower bound on the average review rating
    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// True when no predicate field is set
    pub fn is_empty(&self) -> bool {
        self.owner_id.is_none()
            && self.city.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
            && self.minimum_rating.is_none()
    }
}
