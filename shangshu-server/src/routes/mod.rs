//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `SHANGSHU_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - The `/api` JSON routes (contact form)
//! - Localized HTML pages

mod api;
pub mod doc;
mod health;
mod site;

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ServerError;
use crate::middleware::{cors, trace};
use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .nest("/api", api::router())
        .merge(site::router())
        .fallback(fallback);

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(state.clone())))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

/// JSON 404 under `/api`, the HTML not-found page everywhere else.
async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return ServerError::NotFound(format!("no route for {}", uri.path())).into_response();
    }
    match site::not_found(&state, Some(uri.path())) {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
pub(crate) fn test_state(store: Option<crate::entities::SqliteStore>) -> Arc<AppState> {
    use crate::config::Config;
    use crate::pages::Pages;

    let config = Config::default();
    Arc::new(AppState {
        pages: Arc::new(Pages::new(config.base_url.clone()).unwrap()),
        config: Arc::new(config),
        store,
    })
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn unknown_api_route_is_json_not_found() {
        let response = build(test_state(None))
            .oneshot(Request::get("/api/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "no route for /api/missing");
    }

    #[tokio::test]
    async fn health_is_served() {
        let response = build(test_state(None))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_document_is_served_when_enabled() {
        let response = build(test_state(None))
            .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_on_contact_endpoint_is_not_allowed() {
        let response = build(test_state(None))
            .oneshot(Request::get("/api/contact").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
