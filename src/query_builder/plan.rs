//! Search query construction

use serde_json::Value;

/// A finished statement together with its ordered bind values.
///
/// Invariant: the Nth `$n` placeholder in `sql` corresponds to the Nth entry
/// of `values`, with indices assigned left-to-right and densely.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub sql: String,
    pub values: Vec<Value>,
}

impl QueryPlan {
    pub fn new(sql: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }
}
