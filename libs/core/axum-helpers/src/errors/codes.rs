//! Error code taxonomy for API responses.
//!
//! Each code pairs a client-facing string identifier with a stable
//! integer used in logs and dashboards, so an alert on `1004` means
//! the same thing across every service in the workspace.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// 1001 — malformed request or invalid parameter
    BadRequest,
    /// 1002 — request body is not valid JSON
    InvalidJson,
    /// 1003 — JSON body could not be extracted
    JsonExtraction,
    /// 1004 — no such resource
    NotFound,
    /// 1005 — unexpected server failure
    InternalError,
    /// 1006 — dependency is down, try again later
    ServiceUnavailable,
    /// 2003 — database operation failed
    DatabaseError,
    /// 4001 — file system failure
    IoError,
    /// 5001 — JSON (de)serialization failure
    SerdeJsonError,
}

impl ErrorCode {
    /// Identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::JsonExtraction => "JSON_EXTRACTION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Stable integer for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1001,
            Self::InvalidJson => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::ServiceUnavailable => 1006,
            Self::DatabaseError => 2003,
            Self::IoError => 4001,
            Self::SerdeJsonError => 5001,
        }
    }

    /// Fallback message when the error carries no specific one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "The request is invalid",
            Self::InvalidJson => "Invalid JSON format",
            Self::JsonExtraction => "Failed to read JSON request body",
            Self::NotFound => "Requested resource was not found",
            Self::InternalError => "An unexpected error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "A database error occurred",
            Self::IoError => "An I/O error occurred",
            Self::SerdeJsonError => "JSON processing failed",
        }
    }
}
