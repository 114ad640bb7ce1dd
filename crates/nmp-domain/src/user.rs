//! Users and login credentials

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// A platform user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Record id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Login email
    #[serde(default)]
    pub email: Option<String>,
    /// Board position or platform role
    #[serde(default)]
    pub role: String,
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email
    pub email: String,
    /// Password (sent over the wire, never stored)
    pub password: String,
}

impl Credentials {
    /// Build credentials
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
