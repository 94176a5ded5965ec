//! Search query construction

use serde_json::{json, Value};

use crate::query_builder::filter::PropertyFilter;
use crate::query_builder::plan::QueryPlan;

/// Rows returned when the caller does not supply a limit
pub const DEFAULT_RESULT_LIMIT: i64 = 10;

// The average is cast to float8 so sqlx can decode it as f64; AVG over the
// smallint rating column would otherwise come back as numeric.
const SEARCH_BASE: &str = "SELECT properties.*, \
     AVG(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Assemble the filtered property-listing statement.
///
/// Clause order is fixed: the base select/join, the optional WHERE-class
/// predicates (owner, city, price bounds), `GROUP BY properties.id`, an
/// optional `HAVING` on the average rating, then ordering and the limit.
/// Each bound value's placeholder index is the value list's length at the
/// moment it is pushed, so placeholders stay dense and aligned no matter
/// which filters are present. The limit is always bound, and always last.
pub fn build_property_search(filter: &PropertyFilter, limit: Option<i64>) -> QueryPlan {
    let mut fragments: Vec<String> = vec![SEARCH_BASE.to_string()];
    let mut values: Vec<Value> = Vec::new();
    let mut predicate_count = 0usize;

    if let Some(owner_id) = filter.owner_id {
        values.push(json!(owner_id));
        fragments.push(format!(
            "{} owner_id = ${}",
            where_or_and(&mut predicate_count),
            values.len()
        ));
    }

    if let Some(city) = &filter.city {
        // Substring match on purpose: "ancouv" finds Vancouver.
        values.push(json!(format!("%{city}%")));
        fragments.push(format!(
            "{} city LIKE ${}",
            where_or_and(&mut predicate_count),
            values.len()
        ));
    }

    if let Some(minimum) = filter.minimum_price_per_night {
        values.push(json!(minimum));
        fragments.push(format!(
            "{} cost_per_night >= ${}",
            where_or_and(&mut predicate_count),
            values.len()
        ));
    }

    if let Some(maximum) = filter.maximum_price_per_night {
        values.push(json!(maximum));
        fragments.push(format!(
            "{} cost_per_night <= ${}",
            where_or_and(&mut predicate_count),
            values.len()
        ));
    }

    // Grouping must precede any HAVING predicate.
    fragments.push("GROUP BY properties.id".to_string());

    if let Some(rating) = filter.minimum_rating {
        values.push(json!(rating));
        fragments.push(format!(
            "HAVING AVG(property_reviews.rating) >= ${}",
            values.len()
        ));
    }

    values.push(json!(limit.unwrap_or(DEFAULT_RESULT_LIMIT)));
    fragments.push(format!(
        "ORDER BY cost_per_night LIMIT ${}",
        values.len()
    ));

    QueryPlan::new(fragments.join(" "), values)
}

/// `WHERE` introduces the first filter predicate, `AND` every later one
fn where_or_and(predicate_count: &mut usize) -> &'static str {
    let keyword = if *predicate_count == 0 { "WHERE" } else { "AND" };
    *predicate_count += 1;
    keyword
}
