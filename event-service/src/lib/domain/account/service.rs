use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::Role;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::IdentityVerifierError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::ports::IdentityVerifier;

/// Domain service implementation for account operations.
///
/// Orchestrates the credential store, the password hasher, and the token
/// codec. Holds no request-spanning state; the signing secret lives inside
/// the injected Authenticator.
pub struct AccountService<AR, IV>
where
    AR: AccountRepository,
    IV: IdentityVerifier,
{
    repository: Arc<AR>,
    identity_verifier: Arc<IV>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<AR, IV> AccountService<AR, IV>
where
    AR: AccountRepository,
    IV: IdentityVerifier,
{
    /// Create a new account service with injected dependencies.
    pub fn new(
        repository: Arc<AR>,
        identity_verifier: Arc<IV>,
        authenticator: Arc<Authenticator>,
        token_ttl_hours: i64,
    ) -> Self {
        Self {
            repository,
            identity_verifier,
            authenticator,
            token_ttl_hours,
        }
    }

    fn issue_for(&self, account: Account) -> Result<AuthenticatedAccount, AccountError> {
        let claims = Claims::for_account(account.id, account.role, self.token_ttl_hours);
        let token = self
            .authenticator
            .generate_token(&claims)
            .map_err(|e| AccountError::Unknown(format!("Token generation failed: {}", e)))?;

        Ok(AuthenticatedAccount { account, token })
    }

    async fn register_with_role(
        &self,
        role: Role,
        command: RegisterAccountCommand,
    ) -> Result<AuthenticatedAccount, AccountError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| AccountError::Unknown(format!("Password hashing failed: {}", e)))?;

        let account = Account {
            id: AccountId::new(),
            username: command.username,
            password_hash,
            role,
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;
        self.issue_for(created)
    }
}

#[async_trait]
impl<AR, IV> AccountServicePort for AccountService<AR, IV>
where
    AR: AccountRepository,
    IV: IdentityVerifier,
{
    async fn login(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedAccount, AccountError> {
        // Unknown handle and wrong password must be indistinguishable
        let account = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let claims = Claims::for_account(account.id, account.role, self.token_ttl_hours);
        let result = self
            .authenticator
            .authenticate(password, &account.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                other => AccountError::Unknown(other.to_string()),
            })?;

        Ok(AuthenticatedAccount {
            account,
            token: result.access_token,
        })
    }

    async fn login_federated(
        &self,
        assertion: &str,
    ) -> Result<AuthenticatedAccount, AccountError> {
        let identity = self
            .identity_verifier
            .verify(assertion)
            .await
            .map_err(|e| match e {
                IdentityVerifierError::Rejected(reason) => {
                    tracing::warn!(reason = %reason, "Federated assertion rejected");
                    AccountError::IdentityRejected
                }
                IdentityVerifierError::Unavailable(reason) => {
                    AccountError::IdentityProviderUnavailable(reason)
                }
            })?;

        if !identity.email_verified {
            tracing::warn!("Federated identity carries an unverified email");
            return Err(AccountError::IdentityRejected);
        }

        if email_address::EmailAddress::from_str(&identity.email).is_err() {
            tracing::warn!("Federated identity carries a malformed email");
            return Err(AccountError::IdentityRejected);
        }

        let handle =
            Username::new(identity.email.clone()).map_err(|_| AccountError::IdentityRejected)?;

        if let Some(existing) = self.repository.find_by_username(&handle).await? {
            return self.issue_for(existing);
        }

        // First sight of this identity: create a user-role account whose
        // local password is random material nobody can present.
        let throwaway = Uuid::new_v4().to_string();
        let password_hash = self
            .authenticator
            .hash_password(&throwaway)
            .map_err(|e| AccountError::Unknown(format!("Password hashing failed: {}", e)))?;

        let account = Account {
            id: AccountId::new(),
            username: handle.clone(),
            password_hash,
            role: Role::User,
            created_at: Utc::now(),
        };

        match self.repository.create(account).await {
            Ok(created) => self.issue_for(created),
            // Lost the first-login race: the handle now exists, use it
            Err(AccountError::UsernameAlreadyExists(_)) => {
                let existing = self
                    .repository
                    .find_by_username(&handle)
                    .await?
                    .ok_or_else(|| {
                        AccountError::Unknown("account missing after uniqueness conflict".into())
                    })?;
                self.issue_for(existing)
            }
            Err(e) => Err(e),
        }
    }

    async fn register(
        &self,
        command: RegisterAccountCommand,
    ) -> Result<AuthenticatedAccount, AccountError> {
        self.register_with_role(Role::User, command).await
    }

    async fn register_admin(
        &self,
        caller_role: Role,
        command: RegisterAccountCommand,
    ) -> Result<AuthenticatedAccount, AccountError> {
        if caller_role != Role::Admin {
            return Err(AccountError::AdminRequired);
        }

        self.register_with_role(Role::Admin, command).await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.repository.list_all().await
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError> {
        self.repository.delete(id).await
    }
}
