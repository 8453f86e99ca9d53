use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Event entity - represents an event stored in MongoDB
///
/// Every descriptive field is optional: clients may submit partial
/// documents and absent fields are persisted as nulls. Only the
/// identifier and the two sequence fields are guaranteed present.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Event name
    pub name: Option<String>,
    /// Short tagline
    pub tagline: Option<String>,
    /// Scheduled time, used as the sort key for listings (newest first)
    pub schedule: Option<DateTime<Utc>>,
    /// Event description
    pub description: Option<String>,
    /// Attached file references (URLs or file identifiers)
    #[serde(default)]
    pub files: Vec<String>,
    /// Responsible moderator
    pub moderator: Option<String>,
    /// Category classifier
    pub category: Option<String>,
    /// Sub-category classifier
    pub sub_category: Option<String>,
    /// Ranking value
    pub rigor_rank: Option<i32>,
    /// Attendee references. Always empty at creation and never
    /// mutable through the HTTP surface.
    #[serde(default)]
    pub attendees: Vec<String>,
}

/// DTO for creating or updating an event
///
/// The same field set is accepted on create and update. `attendees`
/// and `id` are deliberately absent: the identifier is server-assigned
/// and the attendee list cannot be written through this API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EventInput {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub schedule: Option<DateTime<Utc>>,
    pub description: Option<String>,
    /// Defaults to an empty sequence when omitted
    #[serde(default)]
    pub files: Vec<String>,
    pub moderator: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub rigor_rank: Option<i32>,
}

/// Query parameters for the root events endpoint
///
/// The endpoint is dispatched on these parameters: `id` selects a
/// single event, otherwise `type=latest` with `limit`/`page` selects
/// a paginated listing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ListEventsQuery {
    /// Event identifier for single-event lookup
    pub id: Option<String>,
    /// Listing mode; only "latest" is supported
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Maximum number of results per page
    pub limit: Option<i64>,
    /// 1-based page number
    pub page: Option<i64>,
}

/// Response body for a successful create
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedEvent {
    /// The newly assigned event identifier
    pub id: Uuid,
}

/// Response body for successful update/delete confirmations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationMessage {
    pub message: String,
}

impl OperationMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Event {
    /// Create a new event from an EventInput DTO
    ///
    /// Assigns a fresh identifier and forces `attendees` to an empty
    /// sequence regardless of anything the caller supplied.
    pub fn new(input: EventInput) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            tagline: input.tagline,
            schedule: input.schedule,
            description: input.description,
            files: input.files,
            moderator: input.moderator,
            category: input.category,
            sub_category: input.sub_category,
            rigor_rank: input.rigor_rank,
            attendees: Vec::new(),
        }
    }
}
