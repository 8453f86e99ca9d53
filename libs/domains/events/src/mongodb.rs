//! MongoDB implementation of EventRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Binary, Document, doc, spec::BinarySubtype, to_document},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::{Event, EventInput};
use crate::repository::EventRepository;

/// MongoDB implementation of the EventRepository
pub struct MongoEventRepository {
    collection: Collection<Event>,
}

impl MongoEventRepository {
    /// Create a new MongoEventRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoEventRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Event>("events");
        Self { collection }
    }

    /// Create a new MongoEventRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Event>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Event> {
        &self.collection
    }

    /// Build the $set document for an update
    ///
    /// Every writable field is set, with absent fields written as
    /// nulls. `attendees` and `_id` never appear here, so an update
    /// leaves them untouched.
    fn build_update(input: &EventInput) -> EventResult<Document> {
        let set = to_document(input).map_err(|e| crate::error::EventError::Database(e.to_string()))?;
        Ok(doc! { "$set": set })
    }

    /// Filter matching the stored `_id` representation.
    ///
    /// `insert_one` goes through the driver's raw (non-human-readable)
    /// serializer, which stores a `Uuid` as a 16-byte generic Binary.
    /// `to_bson` defaults to the human-readable string form and would
    /// never match a stored document, so the Binary is built directly.
    fn id_filter(id: &Uuid) -> Document {
        let binary = Binary {
            subtype: BinarySubtype::Generic,
            bytes: id.as_bytes().to_vec(),
        };
        doc! { "_id": binary }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn insert(&self, event: Event) -> EventResult<Uuid> {
        let id = event.id;
        self.collection.insert_one(&event).await?;

        tracing::info!(event_id = %id, "Event created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let filter = Self::id_filter(&id);
        let event = self.collection.find_one(filter).await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn find_latest(&self, limit: i64, skip: u64) -> EventResult<Vec<Event>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .limit(limit)
            .skip(skip)
            .sort(doc! { "schedule": -1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let events: Vec<Event> = cursor.try_collect().await?;

        Ok(events)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: EventInput) -> EventResult<bool> {
        let filter = Self::id_filter(&id);
        let update = Self::build_update(&input)?;

        let result = self.collection.update_one(filter, update).await?;

        if result.matched_count == 0 {
            return Ok(false);
        }

        tracing::info!(event_id = %id, "Event updated successfully");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> EventResult<bool> {
        let filter = Self::id_filter(&id);
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        tracing::info!(event_id = %id, "Event deleted successfully");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn create_indexes(&self) -> EventResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "schedule": -1 })
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}
