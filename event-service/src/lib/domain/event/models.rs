use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::event::errors::EventIdError;
use crate::domain::event::errors::EventValidationError;

/// Event aggregate entity.
///
/// `creator` is a weak reference to the account that created the event;
/// it is stamped once at creation and never reassigned.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub creator: AccountId,
}

/// Event unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an event ID from its canonical string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, EventIdError> {
        Uuid::parse_str(s)
            .map(EventId)
            .map_err(|e| EventIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new event.
#[derive(Debug)]
pub struct CreateEventCommand {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub creator: AccountId,
}

impl CreateEventCommand {
    /// Construct a create command, validating field presence.
    ///
    /// # Errors
    /// * `MissingTitle` / `MissingDescription` - Blank required field
    pub fn new(
        title: String,
        description: String,
        date: DateTime<Utc>,
        creator: AccountId,
    ) -> Result<Self, EventValidationError> {
        if title.trim().is_empty() {
            return Err(EventValidationError::MissingTitle);
        }
        if description.trim().is_empty() {
            return Err(EventValidationError::MissingDescription);
        }
        Ok(Self {
            title,
            description,
            date,
            creator,
        })
    }
}

/// Sort key for event listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSortKey {
    #[default]
    Date,
    Title,
}

/// Listing query: pagination, sort key, optional creator filter.
#[derive(Debug, Clone)]
pub struct EventListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: EventSortKey,
    pub creator: Option<AccountId>,
}

impl Default for EventListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort_by: EventSortKey::Date,
            creator: None,
        }
    }
}

impl EventListQuery {
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.limit
    }
}
