//! Search query construction
//!
//! This module builds the filtered property-search statement: a partially
//! populated [`PropertyFilter`] plus an optional result limit become a
//! [`QueryPlan`] whose positional placeholders line up with its bind values
//! under any combination of present and absent filters.

pub mod filter;
pub mod plan;
pub mod search;

#[cfg(test)]
mod tests;

pub use filter::PropertyFilter;
pub use plan::QueryPlan;
pub use search::{build_property_search, DEFAULT_RESULT_LIMIT};
