use std::str::FromStr;

use async_trait::async_trait;
use auth::Role;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn account_from_row(row: &PgRow) -> Result<Account, AccountError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| AccountError::Database(e.to_string()))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| AccountError::Database(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| AccountError::Database(e.to_string()))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| AccountError::Database(e.to_string()))?;
    let created_at = row
        .try_get("created_at")
        .map_err(|e| AccountError::Database(e.to_string()))?;

    Ok(Account {
        id: AccountId(id),
        username: Username::new(username)?,
        password_hash,
        role: Role::from_str(&role)
            .map_err(|e| AccountError::Database(format!("Unreadable stored role: {}", e)))?,
        created_at,
    })
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, username, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.id.0)
        .bind(account.username.as_str())
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::UsernameAlreadyExists(
                        account.username.as_str().to_string(),
                    );
                }
            }
            AccountError::Database(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        row.as_ref().map(account_from_row).transpose()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        row.as_ref().map(account_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM accounts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        rows.iter().map(account_from_row).collect()
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            DELETE FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
