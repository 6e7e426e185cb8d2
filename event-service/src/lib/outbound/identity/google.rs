use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::account::errors::IdentityVerifierError;
use crate::domain::account::models::FederatedIdentity;
use crate::domain::account::ports::IdentityVerifier;

const TOKENINFO_ENDPOINT: &str = "https://oauth2.googleapis.com/tokeninfo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Identity verifier backed by Google's tokeninfo endpoint.
///
/// The opaque id_token is sent to Google for validation; the adapter only
/// checks that the returned audience matches our OAuth client id and
/// relays the confirmed email claim. A timeout here is an infrastructure
/// failure, never a verification verdict.
pub struct GoogleIdentityVerifier {
    client: reqwest::Client,
    client_id: String,
}

impl GoogleIdentityVerifier {
    pub fn new(client_id: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, client_id })
    }
}

/// Subset of the tokeninfo response we act on. Google returns every field
/// as a string, including the booleans.
#[derive(Debug, Deserialize)]
struct TokenInfoResponse {
    aud: String,
    email: Option<String>,
    email_verified: Option<String>,
}

fn identity_from_token_info(
    info: TokenInfoResponse,
    expected_audience: &str,
) -> Result<FederatedIdentity, IdentityVerifierError> {
    if info.aud != expected_audience {
        return Err(IdentityVerifierError::Rejected(
            "audience mismatch".to_string(),
        ));
    }

    let email = info.email.ok_or_else(|| {
        IdentityVerifierError::Rejected("assertion carries no email".to_string())
    })?;

    let email_verified = info.email_verified.as_deref() == Some("true");

    Ok(FederatedIdentity {
        email,
        email_verified,
    })
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify(&self, assertion: &str) -> Result<FederatedIdentity, IdentityVerifierError> {
        let response = self
            .client
            .get(TOKENINFO_ENDPOINT)
            .query(&[("id_token", assertion)])
            .send()
            .await
            .map_err(|e| IdentityVerifierError::Unavailable(e.to_string()))?;

        // tokeninfo answers 4xx for assertions it does not recognize
        if response.status().is_client_error() {
            return Err(IdentityVerifierError::Rejected(format!(
                "provider answered {}",
                response.status()
            )));
        }
        if !response.status().is_success() {
            return Err(IdentityVerifierError::Unavailable(format!(
                "provider answered {}",
                response.status()
            )));
        }

        let info: TokenInfoResponse = response
            .json()
            .await
            .map_err(|e| IdentityVerifierError::Unavailable(e.to_string()))?;

        identity_from_token_info(info, &self.client_id)
    }
}
