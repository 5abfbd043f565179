//! Liveness endpoint for load balancers and operators.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health), components(schemas(Health)))]
pub struct HealthApi;

/// Body of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether a submission store is bound.  `false` means every contact
    /// submission will fail with a configuration error.
    pub store: bool,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = Health)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.store.is_some(),
    })
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::entities::SqliteStore;
    use crate::routes::{self, test_state};

    async fn health(store: Option<SqliteStore>) -> Value {
        let response = routes::build(test_state(store))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn reports_unbound_store() {
        let body = health(None).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], false);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn reports_bound_store() {
        let body = health(Some(SqliteStore::in_memory().await.unwrap())).await;
        assert_eq!(body["store"], true);
    }
}
