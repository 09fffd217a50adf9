//! Error types for the papers API.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors from the backing store layer.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Could not open a connection (network, auth, DNS, etc.)
    #[error("Connect error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The query itself failed after connecting
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// Store settings cannot be used to build a query or connection
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Store is reachable in principle but currently refuses work
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Returns true if the failure means the store could not be reached at all.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Unavailable(_))
    }
}

/// Errors surfaced by request handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Requested resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Request parameters failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Unexpected failure while serving the request
    #[error("Internal error: {detail}")]
    Internal {
        /// Message returned to the client
        public: &'static str,
        /// Server-side detail, logged but never returned
        detail: String,
    },
}

impl ApiError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create an internal error with a generic public message.
    #[must_use]
    pub fn internal(public: &'static str, detail: impl ToString) -> Self {
        Self::Internal { public, detail: detail.to_string() }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to API clients.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::NotFound { resource } => format!("{resource} not found"),
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            Self::Internal { public, .. } => (*public).to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { public, detail } = &self {
            tracing::error!(error = %detail, "{}", public);
        }

        let body = Json(serde_json::json!({ "detail": self.to_user_message() }));
        (self.status(), body).into_response()
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;
