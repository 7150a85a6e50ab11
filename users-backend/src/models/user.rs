use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table as returned by the list endpoint.
///
/// Columns are nullable on the wire: the table is provisioned outside this
/// service and the create endpoint does not reject missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub username: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Values bound into the insert statement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<NewUser> for User {
    fn from(user: NewUser) -> Self {
        Self {
            username: user.username,
            email: user.email,
            created_at: Some(user.created_at),
        }
    }
}
