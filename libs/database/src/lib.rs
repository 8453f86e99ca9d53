//! Database connectivity for the workspace services.
//!
//! The `mongodb` feature (on by default) provides the MongoDB
//! connector; `config` adds environment-driven configuration through
//! `core_config::FromEnv`.
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("events");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
