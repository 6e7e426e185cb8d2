use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::EventListQuery;
use crate::domain::event::ports::EventRepository;
use crate::domain::event::ports::EventServicePort;

/// Domain service implementation for event operations.
pub struct EventService<ER>
where
    ER: EventRepository,
{
    repository: Arc<ER>,
}

impl<ER> EventService<ER>
where
    ER: EventRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EventServicePort for EventService<ER>
where
    ER: EventRepository,
{
    async fn create_event(&self, command: CreateEventCommand) -> Result<Event, EventError> {
        let event = Event {
            id: EventId::new(),
            title: command.title,
            description: command.description,
            date: command.date,
            creator: command.creator,
        };

        self.repository.create(event).await
    }

    async fn list_events(&self, query: EventListQuery) -> Result<Vec<Event>, EventError> {
        self.repository.list(&query).await
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), EventError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::account::models::AccountId;

    mock! {
        pub TestEventRepository {}

        #[async_trait]
        impl EventRepository for TestEventRepository {
            async fn create(&self, event: Event) -> Result<Event, EventError>;
            async fn list(&self, query: &EventListQuery) -> Result<Vec<Event>, EventError>;
            async fn delete(&self, id: &EventId) -> Result<(), EventError>;
        }
    }

    #[tokio::test]
    async fn test_create_event_stamps_creator() {
        let mut repository = MockTestEventRepository::new();
        let creator = AccountId::new();

        repository
            .expect_create()
            .withf(move |event| event.creator == creator && event.title == "picnic")
            .times(1)
            .returning(|event| Ok(event));

        let service = EventService::new(Arc::new(repository));

        let command = CreateEventCommand::new(
            "picnic".to_string(),
            "in the park".to_string(),
            Utc::now(),
            creator,
        )
        .unwrap();

        let event = service.create_event(command).await.unwrap();
        assert_eq!(event.creator, creator);
    }

    #[tokio::test]
    async fn test_delete_event_not_found() {
        let mut repository = MockTestEventRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(EventError::NotFound(id.to_string())));

        let service = EventService::new(Arc::new(repository));

        let result = service.delete_event(&EventId::new()).await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }
}
