use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::Role;
use chrono::Utc;
use event_service::domain::account::errors::AccountError;
use event_service::domain::account::errors::IdentityVerifierError;
use event_service::domain::account::models::Account;
use event_service::domain::account::models::AccountId;
use event_service::domain::account::models::FederatedIdentity;
use event_service::domain::account::models::Username;
use event_service::domain::account::ports::AccountRepository;
use event_service::domain::account::ports::IdentityVerifier;
use event_service::domain::account::service::AccountService;
use event_service::domain::comment::errors::CommentError;
use event_service::domain::comment::models::Comment;
use event_service::domain::comment::models::CommentId;
use event_service::domain::comment::ports::CommentRepository;
use event_service::domain::comment::service::CommentService;
use event_service::domain::event::errors::EventError;
use event_service::domain::event::models::Event;
use event_service::domain::event::models::EventId;
use event_service::domain::event::models::EventListQuery;
use event_service::domain::event::models::EventSortKey;
use event_service::domain::event::ports::EventRepository;
use event_service::domain::event::service::EventService;
use event_service::inbound::http::router::create_router;
use event_service::inbound::http::router::AppState;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory account store. The lock makes lookup-then-insert atomic, so
/// handle uniqueness holds under concurrent registration just as the
/// database constraint does.
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .iter()
            .any(|a| a.username.as_str() == account.username.as_str())
        {
            return Err(AccountError::UsernameAlreadyExists(
                account.username.as_str().to_string(),
            ));
        }
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == *id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|a| a.username.as_str() == username.as_str())
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != *id);
        if accounts.len() == before {
            return Err(AccountError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

pub struct InMemoryEventRepository {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: Event) -> Result<Event, EventError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn list(&self, query: &EventListQuery) -> Result<Vec<Event>, EventError> {
        let events = self.events.lock().unwrap();
        let mut matching: Vec<Event> = events
            .iter()
            .filter(|e| query.creator.map_or(true, |c| e.creator == c))
            .cloned()
            .collect();

        match query.sort_by {
            EventSortKey::Date => matching.sort_by_key(|e| e.date),
            EventSortKey::Title => matching.sort_by(|a, b| a.title.cmp(&b.title)),
        }

        Ok(matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn delete(&self, id: &EventId) -> Result<(), EventError> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != *id);
        if events.len() == before {
            return Err(EventError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError> {
        let comments = self.comments.lock().unwrap();
        Ok(comments
            .iter()
            .filter(|c| c.event == *event_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != *id);
        if comments.len() == before {
            return Err(CommentError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Stand-in identity provider. Assertions follow a fixed convention:
/// `verified:<email>` and `unverified:<email>` are confirmed assertions,
/// anything else is rejected.
pub struct StubIdentityVerifier;

#[async_trait]
impl IdentityVerifier for StubIdentityVerifier {
    async fn verify(&self, assertion: &str) -> Result<FederatedIdentity, IdentityVerifierError> {
        if let Some(email) = assertion.strip_prefix("verified:") {
            return Ok(FederatedIdentity {
                email: email.to_string(),
                email_verified: true,
            });
        }
        if let Some(email) = assertion.strip_prefix("unverified:") {
            return Ok(FederatedIdentity {
                email: email.to_string(),
                email_verified: false,
            });
        }
        Err(IdentityVerifierError::Rejected(
            "unknown assertion".to_string(),
        ))
    }
}

/// Test application that spawns the real router on a random port, backed
/// by in-memory adapters.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub account_repository: Arc<InMemoryAccountRepository>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));
        let account_repository = Arc::new(InMemoryAccountRepository::new());
        let event_repository = Arc::new(InMemoryEventRepository::new());
        let comment_repository = Arc::new(InMemoryCommentRepository::new());

        let state = AppState {
            account_service: Arc::new(AccountService::new(
                Arc::clone(&account_repository),
                Arc::new(StubIdentityVerifier),
                Arc::clone(&authenticator),
                24,
            )),
            event_service: Arc::new(EventService::new(event_repository)),
            comment_service: Arc::new(CommentService::new(comment_repository)),
            authenticator: Arc::clone(&authenticator),
        };

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            authenticator,
            account_repository,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Seed an account directly in the store, bypassing the HTTP surface.
    pub async fn seed_account(&self, handle: &str, password: &str, role: Role) -> AccountId {
        let account = Account {
            id: AccountId::new(),
            username: Username::new(handle.to_string()).unwrap(),
            password_hash: self.authenticator.hash_password(password).unwrap(),
            role,
            created_at: Utc::now(),
        };
        let id = account.id;
        self.account_repository.create(account).await.unwrap();
        id
    }

    /// Issue a token for an arbitrary identity with the app's secret.
    pub fn token_for(&self, account_id: AccountId, role: Role, ttl_hours: i64) -> String {
        let claims = Claims::for_account(account_id, role, ttl_hours);
        self.authenticator.generate_token(&claims).unwrap()
    }

    /// Log in via the API and return the token from the response body.
    pub async fn login_token(&self, handle: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({"username": handle, "password": password}))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"].as_str().unwrap().to_string()
    }
}
