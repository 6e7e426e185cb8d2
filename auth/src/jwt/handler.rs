use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Signs with HS256 (HMAC with SHA-256) and accepts nothing else on the
/// decode path: a token whose header declares any other algorithm,
/// `none` included, is rejected before its payload is looked at.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// The secret should be at least 256 bits (32 bytes) for HS256 and
    /// come from configuration, never from code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Signature and algorithm are checked before any claim is trusted;
    /// `exp` is mandatory and checked against the current time.
    ///
    /// # Errors
    /// * `Expired` - Token `exp` has passed
    /// * `BadSignature` - Signature mismatch or unapproved algorithm
    /// * `Malformed` - Not a parseable token or missing required claims
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::InvalidAlgorithmName => JwtError::BadSignature,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
