use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is required")]
    Empty,
}

/// Error for registration password rules
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordRuleError {
    #[error("Password must be at least {min} characters long, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error for the federated identity verifier port
#[derive(Debug, Clone, Error)]
pub enum IdentityVerifierError {
    /// The provider examined the assertion and did not confirm it
    #[error("Identity assertion rejected: {0}")]
    Rejected(String),

    /// The provider could not be reached or timed out; never an allow
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors
    #[error("Invalid account ID: {0}")]
    InvalidAccountId(#[from] AccountIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordRuleError),

    // Domain-level errors
    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    /// Covers unknown handle and wrong password alike; callers cannot tell
    /// which factor failed
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Federated assertion failed verification or carried an unverified
    /// email; deliberately as opaque as `InvalidCredentials`
    #[error("Identity verification failed")]
    IdentityRejected,

    #[error("Forbidden: only an admin can register another admin")]
    AdminRequired,

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Identity provider unavailable: {0}")]
    IdentityProviderUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}
