use thiserror::Error;

/// Error type for password operations.
///
/// Only operational failures live here; a non-matching password is a
/// boolean verification result, never an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Could not verify password: {0}")]
    VerificationFailed(String),
}
