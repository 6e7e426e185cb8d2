use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Account role carried in every issued token.
///
/// A closed enum so authorization checks are exhaustive: a token carrying
/// an unknown role string fails deserialization instead of slipping
/// through string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Role as its wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Error for unrecognized role strings.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

/// Token payload.
///
/// Fixed claim set: account identifier, role, issued-at and expiry.
/// Every field is mandatory; a token missing any of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: account identifier (canonical string form)
    pub sub: String,

    /// Account role
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an account with expiry `ttl_hours` from now.
    pub fn for_account(account_id: impl ToString, role: Role, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: account_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check expiry against a caller-supplied timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
