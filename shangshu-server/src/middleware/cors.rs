use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the CORS layer.  Wildcard unless `SHANGSHU_CORS_ORIGINS` lists
/// explicit origins.
pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let origins: Vec<HeaderValue> = state
        .config
        .cors_allowed_origins
        .as_deref()
        .map(|list| list.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();

    if origins.is_empty() {
        // Wildcard – suitable for development; set SHANGSHU_CORS_ORIGINS in production.
        base.allow_origin(Any)
    } else {
        base.allow_origin(origins)
    }
}
