use std::fmt;

use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::errors::AccountIdError;
use crate::domain::account::errors::PasswordRuleError;
use crate::domain::account::errors::UsernameError;

/// Account aggregate entity.
///
/// A persisted identity: unique handle, opaque password hash, role.
/// The hash never leaves the domain layer; outbound views are built from
/// the other fields only.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from its canonical string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type.
///
/// The account handle. Case-sensitive; the only structural rule is
/// presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted for registration.
///
/// Wrapped so the length rule is applied exactly once, at the edge.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Validate a registration password.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordRuleError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordRuleError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never echo the plaintext into logs
        f.write_str("Password(***)")
    }
}

/// Command to register a new account with validated fields.
#[derive(Debug)]
pub struct RegisterAccountCommand {
    pub username: Username,
    pub password: Password,
}

impl RegisterAccountCommand {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }
}

/// A federated identity confirmed by the external provider.
///
/// Produced by the identity verifier port; the service trusts it only when
/// `email_verified` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedIdentity {
    pub email: String,
    pub email_verified: bool,
}

/// A logged-in account together with its freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account: Account,
    pub token: String,
}
