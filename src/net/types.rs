//! Wire DTOs for the CollabSphere REST API.
//!
//! DESIGN
//! ======
//! The API owns these shapes. Auth payloads are typed; CRUD records stay
//! opaque `serde_json::Value`s because this client only displays and edits a
//! handful of fields per entity kind.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record identifier: the backend mixes integer keys (subjects, classes) with
/// UUID strings (users).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl RecordId {
    /// Read an id out of a JSON value, accepting numbers and strings.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::String(s) if !s.is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

/// Roles seeded by the backend, keyed by `role_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Staff,
    HeadDept,
    Lecturer,
    Student,
    Other(i64),
}

impl Role {
    /// Roles a visitor may pick on the registration form.
    pub const SELF_SERVICE: [Self; 2] = [Self::Student, Self::Lecturer];

    #[must_use]
    pub fn from_id(id: i64) -> Self {
        match id {
            1 => Self::Admin,
            2 => Self::Staff,
            3 => Self::HeadDept,
            4 => Self::Lecturer,
            5 => Self::Student,
            other => Self::Other(other),
        }
    }

    #[must_use]
    pub fn id(self) -> i64 {
        match self {
            Self::Admin => 1,
            Self::Staff => 2,
            Self::HeadDept => 3,
            Self::Lecturer => 4,
            Self::Student => 5,
            Self::Other(id) => id,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Admin => "Admin".to_owned(),
            Self::Staff => "Staff".to_owned(),
            Self::HeadDept => "Head of Department".to_owned(),
            Self::Lecturer => "Lecturer".to_owned(),
            Self::Student => "Student".to_owned(),
            Self::Other(id) => format!("Role {id}"),
        }
    }
}

/// Profile returned by `/users/me` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "user_id")]
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role_id: Option<i64>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Name for UI chrome: full name when set, else the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role_id.map(Role::from_id)
    }
}

/// OAuth2 password-flow token response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// JSON body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role_id: i64,
    pub full_name: String,
}

/// Pagination inputs for list endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: u64,
    pub limit: u32,
    pub search: String,
}

impl ListQuery {
    /// Query for a 1-based page number.
    #[must_use]
    pub fn for_page(page: u32, page_size: u32, search: &str) -> Self {
        let page = page.max(1);
        Self {
            skip: u64::from(page - 1) * u64::from(page_size),
            limit: page_size,
            search: search.trim().to_owned(),
        }
    }

    /// Encoded query string; `search` is omitted when blank.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = format!("skip={}&limit={}", self.skip, self.limit);
        if !self.search.is_empty() {
            query.push_str("&search=");
            query.push_str(&urlencoding::encode(&self.search));
        }
        query
    }
}

/// One page of records. `total` is only known when the API reports it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListPage {
    pub items: Vec<Value>,
    pub total: Option<u64>,
}

impl ListPage {
    /// Accept either a bare JSON array or an `{ items, total }` envelope.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self { items, total: None }),
            Value::Object(mut map) => {
                let total = map.get("total").and_then(Value::as_u64);
                match map.remove("items") {
                    Some(Value::Array(items)) => Some(Self { items, total }),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
