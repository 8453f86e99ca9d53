use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::{Event, EventInput};

/// Repository trait for Event persistence
///
/// This trait defines the data access interface for events.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event, returning its identifier
    async fn insert(&self, event: Event) -> EventResult<Uuid>;

    /// Get an event by ID
    async fn find_by_id(&self, id: Uuid) -> EventResult<Option<Event>>;

    /// List events ordered by schedule descending
    async fn find_latest(&self, limit: i64, skip: u64) -> EventResult<Vec<Event>>;

    /// Replace the writable fields of an event; returns false when no
    /// document matched the identifier
    async fn update(&self, id: Uuid, input: EventInput) -> EventResult<bool>;

    /// Delete an event by ID; returns false when no document matched
    async fn delete(&self, id: Uuid) -> EventResult<bool>;

    /// Ensure the indexes backing the listing queries exist
    async fn create_indexes(&self) -> EventResult<()>;
}
