//! Event Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventInput};
use crate::repository::EventRepository;

/// Default page size when `limit` is absent or out of range
pub const DEFAULT_LIMIT: i64 = 5;

/// Event service providing business logic operations
///
/// The service layer handles identifier parsing, listing-mode
/// dispatch, and pagination arithmetic, and orchestrates repository
/// operations.
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new EventService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Parse a raw identifier string
    ///
    /// Malformed identifiers are an internal error, not a client
    /// error: the id-addressed operations only report found, missing,
    /// or failed.
    fn parse_id(id: &str) -> EventResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| EventError::InvalidId(id.to_string()))
    }

    /// Get an event by its identifier string
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: &str) -> EventResult<Event> {
        let id = Self::parse_id(id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// List the latest events, newest schedule first
    ///
    /// `event_type` must be `"latest"`; any other value (or none) is
    /// rejected. Out-of-range `limit`/`page` values are clamped to
    /// their defaults. A page beyond the data returns an empty list,
    /// never an error.
    #[instrument(skip(self))]
    pub async fn list_latest(
        &self,
        event_type: Option<&str>,
        limit: Option<i64>,
        page: Option<i64>,
    ) -> EventResult<Vec<Event>> {
        if event_type != Some("latest") {
            return Err(EventError::InvalidEventType);
        }

        let limit = match limit {
            Some(l) if l > 0 => l,
            _ => DEFAULT_LIMIT,
        };
        let page = match page {
            Some(p) if p > 0 => p,
            _ => 1,
        };
        // Saturate: an absurdly large page is a valid request for a
        // far-past-the-end (empty) page, not an arithmetic fault.
        let skip = (page - 1).saturating_mul(limit) as u64;

        self.repository.find_latest(limit, skip).await
    }

    /// Create a new event, returning the assigned identifier
    ///
    /// The attendee list is forced empty regardless of the request
    /// body.
    #[instrument(skip(self, input))]
    pub async fn create_event(&self, input: EventInput) -> EventResult<Uuid> {
        self.repository.insert(Event::new(input)).await
    }

    /// Update an existing event
    ///
    /// Replaces every writable field; `attendees` is left untouched.
    #[instrument(skip(self, input))]
    pub async fn update_event(&self, id: &str, input: EventInput) -> EventResult<()> {
        let id = Self::parse_id(id)?;
        if !self.repository.update(id, input).await? {
            return Err(EventError::NotFound(id));
        }
        Ok(())
    }

    /// Delete an event
    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: &str) -> EventResult<()> {
        let id = Self::parse_id(id)?;
        if !self.repository.delete(id).await? {
            return Err(EventError::NotFound(id));
        }
        Ok(())
    }

    /// Ensure backing indexes exist; intended to run once at startup
    #[instrument(skip(self))]
    pub async fn init_indexes(&self) -> EventResult<()> {
        self.repository.create_indexes().await
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockEventRepository;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_get_event_rejects_malformed_id() {
        let repo = MockEventRepository::new();
        let service = EventService::new(repo);

        let err = service.get_event("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, EventError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = EventService::new(repo);

        let id = Uuid::now_v7();
        let err = service.get_event(&id.to_string()).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound(found) if found == id));
    }

    #[tokio::test]
    async fn test_list_latest_rejects_other_types() {
        let repo = MockEventRepository::new();
        let service = EventService::new(repo);

        let err = service
            .list_latest(Some("upcoming"), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::InvalidEventType));

        let repo = MockEventRepository::new();
        let service = EventService::new(repo);
        let err = service.list_latest(None, None, None).await.unwrap_err();
        assert!(matches!(err, EventError::InvalidEventType));
    }

    #[tokio::test]
    async fn test_list_latest_defaults_limit_and_page() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_latest()
            .with(eq(DEFAULT_LIMIT), eq(0u64))
            .returning(|_, _| Ok(vec![]));
        let service = EventService::new(repo);

        service.list_latest(Some("latest"), None, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_latest_clamps_out_of_range_values() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_latest()
            .with(eq(DEFAULT_LIMIT), eq(0u64))
            .returning(|_, _| Ok(vec![]));
        let service = EventService::new(repo);

        service
            .list_latest(Some("latest"), Some(-3), Some(0))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_latest_pagination_skip() {
        let mut repo = MockEventRepository::new();
        // page=2, limit=5 skips the first 5 records
        repo.expect_find_latest()
            .with(eq(5i64), eq(5u64))
            .returning(|_, _| Ok(vec![]));
        let service = EventService::new(repo);

        service
            .list_latest(Some("latest"), Some(5), Some(2))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_latest_extreme_page_saturates_skip() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_latest()
            .with(eq(5i64), eq(i64::MAX as u64))
            .returning(|_, _| Ok(vec![]));
        let service = EventService::new(repo);

        // (i64::MAX - 1) * 5 overflows; the skip must cap, not panic
        service
            .list_latest(Some("latest"), Some(5), Some(i64::MAX))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_event_forces_empty_attendees() {
        let mut repo = MockEventRepository::new();
        repo.expect_insert()
            .withf(|event| event.attendees.is_empty())
            .returning(|event| Ok(event.id));
        let service = EventService::new(repo);

        let input = EventInput {
            name: Some("Summit".to_string()),
            ..Default::default()
        };
        service.create_event(input).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_event_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_update().returning(|_, _| Ok(false));
        let service = EventService::new(repo);

        let err = service
            .update_event(&Uuid::now_v7().to_string(), EventInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_event_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = EventService::new(repo);

        let err = service
            .delete_event(&Uuid::now_v7().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::NotFound(_)));
    }
}
