use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::account::models::AccountId;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::EventListQuery;
use crate::domain::event::models::EventSortKey;
use crate::domain::event::ports::EventRepository;

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn event_from_row(row: &PgRow) -> Result<Event, EventError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| EventError::Database(e.to_string()))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| EventError::Database(e.to_string()))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| EventError::Database(e.to_string()))?;
    let date = row
        .try_get("date")
        .map_err(|e| EventError::Database(e.to_string()))?;
    let creator: uuid::Uuid = row
        .try_get("creator")
        .map_err(|e| EventError::Database(e.to_string()))?;

    Ok(Event {
        id: EventId(id),
        title,
        description,
        date,
        creator: AccountId(creator),
    })
}

// Sort keys come from a closed enum, so column interpolation is safe
fn sort_column(key: EventSortKey) -> &'static str {
    match key {
        EventSortKey::Date => "date",
        EventSortKey::Title => "title",
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn create(&self, event: Event) -> Result<Event, EventError> {
        sqlx::query(
            r#"
            INSERT INTO events (id, title, description, date, creator)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(event.id.0)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(event.creator.0)
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::Database(e.to_string()))?;

        Ok(event)
    }

    async fn list(&self, query: &EventListQuery) -> Result<Vec<Event>, EventError> {
        let sql = format!(
            r#"
            SELECT id, title, description, date, creator
            FROM events
            WHERE ($1::uuid IS NULL OR creator = $1)
            ORDER BY {} ASC
            OFFSET $2 LIMIT $3
            "#,
            sort_column(query.sort_by)
        );

        let rows = sqlx::query(&sql)
            .bind(query.creator.map(|c| c.0))
            .bind(i64::from(query.offset()))
            .bind(i64::from(query.limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| EventError::Database(e.to_string()))?;

        rows.iter().map(event_from_row).collect()
    }

    async fn delete(&self, id: &EventId) -> Result<(), EventError> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
