use thiserror::Error;

/// Error type for JWT operations.
///
/// Decode failures keep their cause internally (for logging) but callers
/// at the request boundary collapse all of them into one external message.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature or algorithm rejected")]
    BadSignature,

    #[error("Token is expired")]
    Expired,
}
