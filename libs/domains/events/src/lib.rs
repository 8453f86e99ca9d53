//! Events domain: CRUD over scheduled events, backed by MongoDB.
//!
//! The crate is layered so the HTTP surface never touches the driver
//! directly:
//!
//! - [`handlers`] — Axum routes and OpenAPI paths
//! - [`service`] — query dispatch, pagination, id parsing
//! - [`repository`] — storage trait (mocked in tests)
//! - [`mongodb`] — the MongoDB implementation of that trait
//! - [`models`] — entities and request/response types
//!
//! A service embeds the domain by constructing the repository over a
//! database handle and mounting the router:
//!
//! ```rust,no_run
//! use domain_events::{EventService, MongoEventRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoEventRepository::new(client.database("events"));
//! let router = handlers::router(EventService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{CreatedEvent, Event, EventInput, ListEventsQuery, OperationMessage};
pub use mongodb::MongoEventRepository;
pub use repository::EventRepository;
pub use service::EventService;
