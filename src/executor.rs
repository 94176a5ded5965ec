//! Query plan execution
//!
//! The store layer consumes a single database capability: submit a finished
//! [`QueryPlan`] and await rows or failure. [`PlanExecutor`] is that seam;
//! the [`DbPool`] implementation binds each JSON value to its native
//! Postgres type and records statement timing.

use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use crate::query_builder::QueryPlan;

pub type DbPool = PgPool;

/// Executes parameterized statements and returns raw rows.
///
/// Connection acquisition, pooling and retry policy live behind this trait;
/// callers only hand over a plan.
#[async_trait]
pub trait PlanExecutor: Send + Sync {
    async fn fetch_rows(&self, plan: &QueryPlan) -> Result<Vec<PgRow>, sqlx::Error>;
}

#[async_trait]
impl PlanExecutor for DbPool {
    async fn fetch_rows(&self, plan: &QueryPlan) -> Result<Vec<PgRow>, sqlx::Error> {
        let started = Instant::now();

        let mut query = sqlx::query(&plan.sql);
        for value in &plan.values {
            query = bind_value(query, value);
        }
        crate::trace_log!("bound {} values", plan.values.len());

        let rows = match query.fetch_all(self).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(statement = %plan.sql, error = %e, "query failed");
                return Err(e);
            }
        };

        tracing::debug!(
            statement = %plan.sql,
            duration_ms = started.elapsed().as_millis() as u64,
            rows = rows.len(),
            "executed query"
        );

        Ok(rows)
    }
}

/// Bind a JSON value as its native Postgres type.
///
/// Plans built by this crate only carry numbers and strings; the fallback
/// arm binds anything else as jsonb.
fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q Value,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        Value::Null => query.bind(Option::<String>::None),
        Value::Bool(flag) => query.bind(*flag),
        Value::Number(number) if number.is_i64() => query.bind(number.as_i64()),
        Value::Number(number) => query.bind(number.as_f64()),
        Value::String(text) => query.bind(text.as_str()),
        other => query.bind(other.clone()),
    }
}
