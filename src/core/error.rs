//! Typed error handling for the API
//!
//! Every request failure is an [`ApiError`]. Handlers and extractors return
//! `Result<_, ApiError>` and axum turns the error into a JSON response of the
//! form `{ "error": "<message>" }` with the matching status code.
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: a field or rule violation, always 400
//! - [`ApiError::NotFound`]: the record named in the path does not exist, 404
//! - [`ApiError::RouteNotFound`] / [`ApiError::MethodNotAllowed`]: routing misses
//! - [`ApiError::Internal`]: anything unexpected (store failures), 500
//!
//! # Example
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let dish = store
//!     .get(&id)
//!     .await?
//!     .ok_or_else(|| ApiError::not_found::<Dish>(&id))?;
//! ```

use crate::core::entity::Entity;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type returned by every handler and guard
#[derive(Debug)]
pub enum ApiError {
    /// The request body broke a validation rule
    Validation(ValidationError),

    /// No record with the requested id
    NotFound {
        /// Display name of the resource ("Dish", "Order")
        resource: &'static str,
        id: String,
    },

    /// No route matches the request path
    RouteNotFound { path: String },

    /// The path exists but does not support the method
    MethodNotAllowed { method: String, path: String },

    /// Unexpected failure (store errors, poisoned locks)
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::NotFound { resource, id } => {
                write!(f, "{} id not found: {}", resource, id)
            }
            ApiError::RouteNotFound { path } => write!(f, "Path not found: {}", path),
            ApiError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Error body sent to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Shorthand for a 400 with a free-form rule message
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(ValidationError::Rule {
            message: message.into(),
        })
    }

    /// Not-found error for a record of type `T`
    pub fn not_found<T: Entity>(id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource: T::display_name(),
            id: id.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response
    ///
    /// Internal errors are masked so store details never reach clients.
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        ErrorResponse { error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Internal(msg) => tracing::error!(error = %msg, "request failed"),
            other => tracing::warn!(status = status.as_u16(), error = %other, "request rejected"),
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{:#}", err))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by the validation chain
#[derive(Debug)]
pub enum ValidationError {
    /// A required field is absent or falsy
    MissingField {
        resource: &'static str,
        field: String,
    },

    /// A text field carried a non-string JSON value
    NotText {
        resource: &'static str,
        field: String,
    },

    /// The request body is not valid JSON
    InvalidJson { message: String },

    /// A resource-specific rule was broken (price, dishes, status, ids)
    Rule { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { resource, field } => {
                write!(f, "{} must include a {}", resource, field)
            }
            ValidationError::NotText { resource, field } => {
                write!(f, "{} {} must be a string", resource, field)
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON body: {}", message)
            }
            ValidationError::Rule { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}
