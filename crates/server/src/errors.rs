use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// HTTP face of a [`ServiceError`].
///
/// Not found is 404 with an `EntityNotFoundException` body, forbidden is 403 with
/// no body, malformed input is 400 and store failures are 500.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0.to_string();
        let (status, kind) = match self.0 {
            ServiceError::Forbidden => return StatusCode::FORBIDDEN.into_response(),
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "EntityNotFoundException"),
            ServiceError::Malformed(_) => (StatusCode::BAD_REQUEST, "MalformedInput"),
            ServiceError::Store(_) => {
                error!(error = %msg, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "StoreFailure")
            }
        };
        (status, Json(serde_json::json!({"type": kind, "message": msg}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
