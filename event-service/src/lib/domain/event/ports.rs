use async_trait::async_trait;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::EventListQuery;

/// Port for event domain service operations.
#[async_trait]
pub trait EventServicePort: Send + Sync + 'static {
    /// Create a new event stamped with its creator.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn create_event(&self, command: CreateEventCommand) -> Result<Event, EventError>;

    /// List events with pagination, sorting, and an optional creator
    /// filter.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn list_events(&self, query: EventListQuery) -> Result<Vec<Event>, EventError>;

    /// Delete an event.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `Database` - Store operation failed
    async fn delete_event(&self, id: &EventId) -> Result<(), EventError>;
}

/// Persistence operations for the event aggregate.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    /// Persist a new event.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn create(&self, event: Event) -> Result<Event, EventError>;

    /// Retrieve events matching the query, sorted ascending on the sort
    /// key.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn list(&self, query: &EventListQuery) -> Result<Vec<Event>, EventError>;

    /// Remove an event.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `Database` - Store operation failed
    async fn delete(&self, id: &EventId) -> Result<(), EventError>;
}
