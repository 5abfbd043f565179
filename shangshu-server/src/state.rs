//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::entities::SqliteStore;
use crate::pages::Pages;

/// State shared across all HTTP handlers.  Immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Submission store; `None` when no database is configured.
    pub store: Option<SqliteStore>,
    /// Template environment and translation tables.
    pub pages: Arc<Pages>,
}
