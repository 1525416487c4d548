//! # REST API Errors
//!
//! Every failure a handler can produce, and its rendering as an envelope.
//!
//! - `Validation`: 400, `data` maps each invalid field to a message
//! - `NotFound` / `RouteNotFound`: 404, no `data`
//! - `MethodNotAllowed`: 405, no `data`
//! - `Internal`: 500, a short description only

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::model::{FieldErrors, PersonaId};
use crate::store::StoreError;

use super::response::ApiResponse;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Submitted persona failed field validation
    #[error("Validation error on submitted data")]
    Validation(FieldErrors),

    /// No persona with this id
    #[error("Persona with ID {0} not found")]
    NotFound(PersonaId),

    /// No route matches the request
    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// The path exists but does not accept this method
    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything unanticipated: unreadable input, store faults, panics
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the envelope for this error
    pub fn to_envelope(&self) -> ApiResponse<FieldErrors> {
        match self {
            RestError::Validation(fields) => {
                ApiResponse::error_with_details(self.to_string(), fields.clone())
            }
            _ => ApiResponse::error(self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            RestError::Validation(fields) => {
                let invalid: Vec<&str> = fields.fields().collect();
                info!(fields = ?invalid, "rejected invalid persona");
            }
            RestError::NotFound(id) => debug!(id, "persona not found"),
            RestError::RouteNotFound { method, path } => debug!(%method, %path, "no route"),
            RestError::MethodNotAllowed { method, path } => {
                debug!(%method, %path, "method not allowed")
            }
            RestError::Internal(reason) => error!(%reason, "internal error"),
        }
    }
}

impl From<FieldErrors> for RestError {
    fn from(fields: FieldErrors) -> Self {
        RestError::Validation(fields)
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        RestError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::Internal(rejection.body_text())
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::Internal(rejection.body_text())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Json(self.to_envelope());
        (status, body).into_response()
    }
}
