//! Typed error handling for the rollcall API
//!
//! This module provides an error type hierarchy that lets callers match on
//! specific failures instead of dealing with generic `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`EntityError`]: lookups that missed (groups, members)
//! - [`RequestError`]: invalid input rejected at the HTTP boundary
//! - [`QueryError`]: filter expressions that cannot be evaluated
//! - [`StorageError`]: failures inside the record store
//! - [`ConfigError`]: configuration parsing and validation
//!
//! # Example
//!
//! ```rust,ignore
//! use rollcall::prelude::*;
//!
//! match service.find_one(7).await?.ok_or(EntityError::NotFound { entity_type: "group", id: 7 }) {
//!     Ok(group) => println!("Found: {:?}", group),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Convenience alias used by the store and the HTTP handlers
pub type Result<T> = std::result::Result<T, RollcallError>;

/// The main error type for the rollcall API
#[derive(Debug, Error)]
pub enum RollcallError {
    /// Lookup errors (404)
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Invalid requests (400)
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Query expression errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Record store errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl RollcallError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RollcallError::Entity(e) => e.status_code(),
            RollcallError::Request(e) => e.status_code(),
            RollcallError::Query(e) => e.status_code(),
            RollcallError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RollcallError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RollcallError::Entity(e) => e.error_code(),
            RollcallError::Request(e) => e.error_code(),
            RollcallError::Query(e) => e.error_code(),
            RollcallError::Storage(_) => "STORAGE_ERROR",
            RollcallError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            RollcallError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({ "entity_type": entity_type, "id": id }))
            }
            RollcallError::Entity(EntityError::MemberNotFound {
                group_id,
                member_id,
            }) => Some(serde_json::json!({ "group_id": group_id, "member_id": member_id })),
            RollcallError::Query(QueryError::InvalidFilterToken { token, .. }) => {
                Some(serde_json::json!({ "token": token }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for RollcallError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Lookup misses at group or member level
#[derive(Debug, Error)]
pub enum EntityError {
    /// Record was not found by id
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: i64 },

    /// Listing members of a group that does not exist
    #[error("Group not found by id")]
    GroupNotFound { id: i64 },

    /// Member is not part of the given group
    #[error("Invalid group or member id")]
    MemberNotFound { group_id: i64, member_id: i64 },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::GroupNotFound { .. } => "GROUP_NOT_FOUND",
            EntityError::MemberNotFound { .. } => "MEMBER_NOT_FOUND",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Input rejected before it reaches the store or the query engine
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid page number")]
    InvalidPage { page: i64 },

    #[error("Invalid limit")]
    InvalidLimit { limit: i64 },

    /// Body missing or not a valid record
    #[error("{entity_type} is required: {message}")]
    InvalidBody {
        entity_type: &'static str,
        message: String,
    },

    /// Replacement body does not carry the id of the path
    #[error("Id of {entity_type} object must match id supplied")]
    IdMismatch {
        entity_type: &'static str,
        path_id: i64,
        body_id: Option<i64>,
    },

    /// Path or query string could not be decoded
    #[error("Invalid request: {message}")]
    Malformed { message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidPage { .. } => "INVALID_PAGE",
            RequestError::InvalidLimit { .. } => "INVALID_LIMIT",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::IdMismatch { .. } => "ID_MISMATCH",
            RequestError::Malformed { .. } => "BAD_REQUEST",
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised while preparing a filter/sort/page query
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A filter pattern is not a valid regular expression
    #[error("Invalid filter token '{token}': {message}")]
    InvalidFilterToken { token: String, message: String },
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidFilterToken { .. } => "INVALID_FILTER_TOKEN",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by the record store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to acquire {resource} lock: poisoned")]
    LockPoisoned { resource: &'static str },

    /// The id counter cannot advance past `i64::MAX`
    #[error("No ids left for {resource}")]
    IdsExhausted { resource: &'static str },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}
