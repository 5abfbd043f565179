//! Unified server error type.
//!
//! JSON handlers return `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are converted to a
//! `{"error": "..."}` body with an appropriate status code.
//!
//! Internal errors (database, template rendering) are logged with full detail
//! but only a fixed message is returned to the caller, so SQL and file paths
//! never leak to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub const MISSING_FIELDS: &str = "Name, email, and message are required";
pub const STORE_UNAVAILABLE: &str = "Database configuration error";
pub const SUBMIT_FAILED: &str = "Failed to submit contact form";

/// All errors that can occur in the shangshu-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The caller referenced a resource that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The submission body could not be read or parsed.
    #[error("submission body unreadable")]
    SubmitFailed,

    /// No submission store is bound to this deployment.
    #[error("submission store is not configured")]
    StoreUnavailable,

    /// Propagated from the submission store.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            // Client-facing errors: expose the message directly.
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ServerError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),

            // Operator errors: the caller cannot fix these.
            ServerError::StoreUnavailable => {
                error!("submission store binding not found");
                (StatusCode::INTERNAL_SERVER_ERROR, STORE_UNAVAILABLE.to_owned())
            }
            ServerError::SubmitFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, SUBMIT_FAILED.to_owned())
            }
            ServerError::Database(e) => {
                error!(error = %e, "error submitting contact form");
                (StatusCode::INTERNAL_SERVER_ERROR, SUBMIT_FAILED.to_owned())
            }
            ServerError::Render(e) => {
                error!(error = %e, "template render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ServerError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_exposes_message() {
        let (status, body) = render(ServerError::BadRequest(MISSING_FIELDS.into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_FIELDS);
    }

    #[tokio::test]
    async fn store_unavailable_is_configuration_error() {
        let (status, body) = render(ServerError::StoreUnavailable).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], STORE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let (status, body) = render(ServerError::Database(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], SUBMIT_FAILED);
    }

    #[tokio::test]
    async fn unreadable_submission_is_generic_error() {
        let (status, body) = render(ServerError::SubmitFailed).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], SUBMIT_FAILED);
    }

    #[tokio::test]
    async fn not_found_exposes_message() {
        let (status, body) = render(ServerError::NotFound("no route for /api/x".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no route for /api/x");
    }
}
