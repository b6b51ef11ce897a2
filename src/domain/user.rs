use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::object_id::ObjectId;

/// Domain representation of a registered user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never serialized to clients.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub last_modified_at: NaiveDateTime,
}

/// Payload required to insert a new user.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email: email.to_lowercase(),
            password_hash,
        }
    }
}
