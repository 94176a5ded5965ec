//! Typed stores over the rental schema

use serde_json::json;
use sqlx::FromRow;

use crate::errors::StayhausError;
use crate::executor::{DbPool, PlanExecutor};
use crate::models::{NewUser, User};
use crate::query_builder::QueryPlan;

pub(crate) const USER_BY_EMAIL_SQL: &str = "SELECT * FROM users WHERE email = $1";
pub(crate) const USER_BY_ID_SQL: &str = "SELECT * FROM users WHERE id = $1";
pub(crate) const USER_CREATE_SQL: &str =
    "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *";

/// User lookup and registration
#[derive(Clone)]
pub struct UserStore {
    db_pool: DbPool,
}

impl UserStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    /// Get a single user by email address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StayhausError> {
        let plan = QueryPlan::new(USER_BY_EMAIL_SQL, vec![json!(email)]);
        self.fetch_optional(&plan, "find_by_email").await
    }

    /// Get a single user by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, StayhausError> {
        let plan = QueryPlan::new(USER_BY_ID_SQL, vec![json!(id)]);
        self.fetch_optional(&plan, "find_by_id").await
    }

    /// Register a user and return the stored row
    pub async fn create(&self, user: NewUser) -> Result<User, StayhausError> {
        let plan = QueryPlan::new(
            USER_CREATE_SQL,
            vec![json!(user.name), json!(user.email), json!(user.password)],
        );

        let rows = self
            .db_pool
            .fetch_rows(&plan)
            .await
            .map_err(|e| StayhausError::query_execution("users", "create", e))?;

        rows.first()
            .ok_or(sqlx::Error::RowNotFound)
            .and_then(User::from_row)
            .map_err(|e| StayhausError::query_execution("users", "create", e))
    }

    async fn fetch_optional(
        &self,
        plan: &QueryPlan,
        operation: &'static str,
    ) -> Result<Option<User>, StayhausError> {
        let rows = self
            .db_pool
            .fetch_rows(plan)
            .await
            .map_err(|e| StayhausError::query_execution("users", operation, e))?;

        rows.first()
            .map(User::from_row)
            .transpose()
            .map_err(|e| StayhausError::query_execution("users", operation, e))
    }
}
