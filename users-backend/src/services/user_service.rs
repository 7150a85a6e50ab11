use crate::error::Result;
use crate::models::user::{NewUser, User};
use async_trait::async_trait;
use chrono::SecondsFormat;
use serde_json::{json, Value as JsonValue};
use sqlx::PgPool;

/// Data access for the `users` table. Each call runs exactly one statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every row, in the order the database returns them.
    async fn list(&self) -> Result<Vec<User>>;

    /// Inserts one row and returns all of its columns as a JSON object.
    async fn insert(&self, user: NewUser) -> Result<JsonValue>;

    /// Removes every row; returns how many were deleted.
    async fn delete_all(&self) -> Result<u64>;
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>> {
        // The table is provisioned elsewhere; casts keep decoding independent
        // of whether the columns are TEXT, VARCHAR, TIMESTAMP or TIMESTAMPTZ.
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                username::text AS username,
                email::text AS email,
                created_at::timestamptz AS created_at
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn insert(&self, user: NewUser) -> Result<JsonValue> {
        // jsonb_populate_record converts each value with the input function of
        // the target column's type, so an ISO-8601 string lands correctly in a
        // TEXT, TIMESTAMP or TIMESTAMPTZ column.
        let row = json!({
            "username": user.username,
            "email": user.email,
            "created_at": user.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        });
        let (record,): (JsonValue,) = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, created_at)
            SELECT r.username, r.email, r.created_at
            FROM jsonb_populate_record(NULL::users, $1) AS r
            RETURNING row_to_json(users.*)
            "#,
        )
        .bind(row)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
