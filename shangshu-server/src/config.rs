//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for shangshu-server.
///
/// Every field has a default so the site renders out-of-the-box; only the
/// contact form needs `SHANGSHU_DATABASE_URL` to accept submissions.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// sqlx SQLite URL, e.g. `"sqlite://contacts.db?mode=rwc"`.
    ///
    /// `None` leaves the submission store unbound: pages still render, and
    /// `POST /api/contact` answers with a configuration error.
    pub database_url: Option<String>,

    /// Maximum pooled connections to the submission store.
    pub database_max_connections: u32,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; wildcard when `None`.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,

    /// Canonical site URL used in metadata and structured data, without a
    /// trailing slash.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            bind_address: non_empty("SHANGSHU_BIND").unwrap_or_else(|| "0.0.0.0:3000".to_owned()),
            database_url: non_empty("SHANGSHU_DATABASE_URL"),
            database_max_connections: non_empty("SHANGSHU_DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            log_level: non_empty("SHANGSHU_LOG").unwrap_or_else(|| "info".to_owned()),
            log_json: non_empty("SHANGSHU_LOG_JSON")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            cors_allowed_origins: non_empty("SHANGSHU_CORS_ORIGINS"),
            enable_swagger: non_empty("SHANGSHU_ENABLE_SWAGGER")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            base_url: non_empty("SHANGSHU_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| "https://kingcpm.com".to_owned()),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
