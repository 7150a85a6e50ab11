use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::models::user::NewUser;

/// Accepts any JSON scalar and keeps its text form, the way the database
/// would coerce a bound parameter. `null` stays absent.
fn deserialize_text_flexible<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(other) => Ok(Some(other.to_string())),
    }
}

/// Body of `POST /api/add-users`. Absent fields are passed to the insert as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserPayload {
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub email: Option<String>,
}

impl CreateUserPayload {
    pub fn stamped(self, created_at: DateTime<Utc>) -> NewUser {
        NewUser {
            username: self.username,
            email: self.email,
            created_at,
        }
    }
}
