//! Contact-form submission endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use utoipa::OpenApi;
use validator::Validate;

use crate::entities::ContactStore;
use crate::error::{MISSING_FIELDS, ServerError};
use crate::schemas::contact::{ContactAccepted, ContactRequest, ErrorBody, SUBMITTED};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(submit_contact),
    components(schemas(ContactRequest, ContactAccepted, ErrorBody))
)]
pub struct ContactApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", post(submit_contact))
}

/// Accept one contact-form submission.
///
/// Checks run in order: JSON syntax, required fields, store binding, insert.
/// Nothing is written unless every check passes.  `Content-Type` is not
/// required; an unreadable or unparseable body is a 500 like any other
/// submission failure, while a well-formed body of the wrong shape is a 400.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission stored", body = ContactAccepted),
        (status = 400, description = "Missing required field", body = ErrorBody),
        (status = 500, description = "Unparseable body, store not configured or insert failed", body = ErrorBody),
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactAccepted>, ServerError> {
    let body = body.map_err(|rejection| {
        warn!(error = %rejection, "failed to read contact body");
        ServerError::SubmitFailed
    })?;
    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "contact body is not valid JSON");
        ServerError::SubmitFailed
    })?;

    // JSON that is not an object carries no fields.
    let req = ContactRequest::deserialize(value).unwrap_or_default();

    req.validate().map_err(|errors| {
        debug!(error = %errors, "contact submission failed validation");
        ServerError::BadRequest(MISSING_FIELDS.to_owned())
    })?;

    let store = state.store.as_ref().ok_or(ServerError::StoreUnavailable)?;

    let id = store.insert_contact(req.into_new_contact(Utc::now())).await?;
    info!(contact_id = id, "contact form submitted");

    Ok(Json(ContactAccepted {
        success: true,
        message: SUBMITTED.to_owned(),
    }))
}
