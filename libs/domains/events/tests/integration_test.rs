//! Integration tests for the events domain
//!
//! These run against a real MongoDB instance and are ignored by
//! default. Point `MONGODB_URL` at a running server and run with
//! `--ignored` to exercise the full storage round-trip.

use chrono::{Duration, Utc};
use domain_events::{Event, EventInput, EventRepository, MongoEventRepository};
use mongodb::Client;
use uuid::Uuid;

/// Repository over a per-test collection, so tests never see each
/// other's documents.
async fn test_repository() -> MongoEventRepository {
    let url =
        std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&url)
        .await
        .expect("MongoDB must be reachable for integration tests");
    let db = client.database("events_integration_tests");
    MongoEventRepository::with_collection(db, &format!("events_{}", Uuid::now_v7().simple()))
}

#[tokio::test]
#[ignore]
async fn test_event_lifecycle_round_trip() {
    let repo = test_repository().await;

    let input = EventInput {
        name: Some("Launch party".to_string()),
        category: Some("social".to_string()),
        ..Default::default()
    };
    let id = repo.insert(Event::new(input)).await.unwrap();

    let found = repo
        .find_by_id(id)
        .await
        .unwrap()
        .expect("inserted event must be retrievable by id");
    assert_eq!(found.id, id);
    assert_eq!(found.name.as_deref(), Some("Launch party"));
    assert!(found.attendees.is_empty());

    let update = EventInput {
        name: Some("Launch party (rescheduled)".to_string()),
        ..Default::default()
    };
    assert!(repo.update(id, update).await.unwrap());

    let updated = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(updated.name.as_deref(), Some("Launch party (rescheduled)"));
    // Update wrote nulls for absent fields but left attendees alone
    assert_eq!(updated.category, None);
    assert!(updated.attendees.is_empty());

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_unknown_id_is_absent_not_an_error() {
    let repo = test_repository().await;
    let id = Uuid::now_v7();

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.update(id, EventInput::default()).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_find_latest_orders_and_paginates() {
    let repo = test_repository().await;

    let base = Utc::now();
    for i in 0..7 {
        let input = EventInput {
            name: Some(format!("event {i}")),
            schedule: Some(base - Duration::hours(i)),
            ..Default::default()
        };
        repo.insert(Event::new(input)).await.unwrap();
    }

    // Newest schedule first
    let first_page = repo.find_latest(5, 0).await.unwrap();
    assert_eq!(first_page.len(), 5);
    assert_eq!(first_page[0].name.as_deref(), Some("event 0"));
    assert_eq!(first_page[4].name.as_deref(), Some("event 4"));

    let second_page = repo.find_latest(5, 5).await.unwrap();
    assert_eq!(second_page.len(), 2);
    assert_eq!(second_page[0].name.as_deref(), Some("event 5"));

    let past_the_end = repo.find_latest(5, 50).await.unwrap();
    assert!(past_the_end.is_empty());
}
