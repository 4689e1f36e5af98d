//! Account types and the authentication contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Server-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw id, rejecting non-positive values
    pub fn new(raw: i64) -> Result<Self> {
        if raw <= 0 {
            return Err(Error::invalid(format!("user id must be positive, got {}", raw)));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// New account registration
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<()> {
        require("username", &self.username)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Fail with InvalidInput when `value` is blank
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Remote account operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Create an account and return its id
    async fn register(&self, registration: Registration) -> Result<UserId>;

    /// Exchange credentials for a user id
    async fn login(&self, credentials: Credentials) -> Result<UserId>;
}
