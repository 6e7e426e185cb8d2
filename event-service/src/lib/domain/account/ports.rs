use async_trait::async_trait;
use auth::Role;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::IdentityVerifierError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::FederatedIdentity;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Authenticate a handle/password pair and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown handle or wrong password (the two
    ///   are indistinguishable to the caller)
    /// * `Database` - Store operation failed
    async fn login(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedAccount, AccountError>;

    /// Authenticate via a third-party identity assertion.
    ///
    /// Creates a `user`-role account on first sight of a confirmed email;
    /// repeat calls with the same identity resolve to the same account.
    ///
    /// # Errors
    /// * `IdentityRejected` - Assertion failed verification or the email
    ///   is not verified
    /// * `IdentityProviderUnavailable` - Verifier unreachable or timed out
    /// * `Database` - Store operation failed
    async fn login_federated(&self, assertion: &str)
        -> Result<AuthenticatedAccount, AccountError>;

    /// Create a `user`-role account and issue a token for it.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Handle is taken
    /// * `Database` - Store operation failed
    async fn register(
        &self,
        command: RegisterAccountCommand,
    ) -> Result<AuthenticatedAccount, AccountError>;

    /// Create an `admin`-role account; only admins may do this.
    ///
    /// The caller's role is checked before anything else.
    ///
    /// # Errors
    /// * `AdminRequired` - Caller is not an admin
    /// * `UsernameAlreadyExists` - Handle is taken
    /// * `Database` - Store operation failed
    async fn register_admin(
        &self,
        caller_role: Role,
        command: RegisterAccountCommand,
    ) -> Result<AuthenticatedAccount, AccountError>;

    /// Retrieve all accounts.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError>;

    /// Delete an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `Database` - Store operation failed
    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// Uniqueness on the handle is enforced by the store; a concurrent
/// duplicate create surfaces as `UsernameAlreadyExists`, never as a lost
/// write.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Handle is taken
    /// * `Database` - Store operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by handle (case-sensitive).
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;

    /// Retrieve all accounts.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;

    /// Remove an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `Database` - Store operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
}

/// Port for third-party identity assertion verification.
///
/// The implementation talks to the external provider; the domain only
/// consumes its confirmed output.
#[async_trait]
pub trait IdentityVerifier: Send + Sync + 'static {
    /// Verify an opaque provider-issued assertion against the expected
    /// audience and return the confirmed identity.
    ///
    /// # Errors
    /// * `Rejected` - Provider did not confirm the assertion
    /// * `Unavailable` - Provider unreachable or timed out
    async fn verify(&self, assertion: &str) -> Result<FederatedIdentity, IdentityVerifierError>;
}
