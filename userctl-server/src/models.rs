//! Request and response bodies for the users API

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Message returned alongside the generated id on create.
pub const USER_CREATED: &str = "User created successfully";

/// User record as read from the `users` table.
///
/// `email` is only selected by the list query; single-user lookups leave it
/// unset and it is omitted from the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// POST /users body
///
/// A missing `name` is not rejected; it is written as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
}

/// PUT /users/{id} body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
}

/// Read a JSON scalar as text: numbers and booleans keep their JSON spelling,
/// null maps to `None`. Arrays and objects are still refused.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string, number or boolean, found {other}"
        ))),
    }
}

/// POST /users response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: i64,
    pub message: String,
}

impl CreatedUser {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            message: USER_CREATED.to_owned(),
        }
    }
}
