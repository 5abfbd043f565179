//! shangshu-server – entry point.
//!
//! Startup order:
//! 1. Parse the command line and configuration from environment variables.
//! 2. Initialise structured tracing (JSON in production, pretty in dev).
//! 3. Open the SQLite submission store (if configured) and run migrations.
//! 4. Load templates and translation tables.
//! 5. Build the Axum router and start the HTTP server with graceful shutdown.

mod cli;
mod config;
mod entities;
mod error;
mod middleware;
mod pages;
mod routes;
mod schemas;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::entities::SqliteStore;
use crate::pages::Pages;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Configuration ───────────────────────────────────────────────────────
    let cli = Cli::parse();
    let cfg = Config::from_env();

    // ── 2. Tracing ─────────────────────────────────────────────────────────────
    init_tracing(&cfg);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg).await,
        Command::Contacts { limit } => {
            let url = cfg
                .database_url
                .as_deref()
                .context("SHANGSHU_DATABASE_URL must be set to read submissions")?;
            let store = SqliteStore::connect(url, cfg.database_max_connections).await?;
            let mut stdout = std::io::stdout().lock();
            let written = cli::export_contacts(&store, limit, &mut stdout).await?;
            info!(written, "exported contact submissions");
            Ok(())
        }
    }
}

fn init_tracing(cfg: &Config) {
    // Build the log-level filter, warning loudly if the configured value is
    // not a valid tracing filter expression.
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match cfg.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: SHANGSHU_LOG='{}' is not a valid tracing filter ({}); \
                     falling back to 'info'",
                    cfg.log_level, e
                );
                tracing_subscriber::EnvFilter::new("info")
            }
        },
    };

    // Logs go to stderr so `contacts` output on stdout stays machine-readable.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn serve(cfg: Config) -> anyhow::Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "shangshu-server starting");

    // ── 3. Submission store ────────────────────────────────────────────────────
    let store = match cfg.database_url.as_deref() {
        Some(url) => {
            let store = SqliteStore::connect(url, cfg.database_max_connections).await?;
            info!(database_url = %url, "database ready");
            Some(store)
        }
        None => {
            warn!("SHANGSHU_DATABASE_URL not set; contact submissions will be rejected");
            None
        }
    };

    // ── 4. Templates + translations ────────────────────────────────────────────
    let pages = Pages::new(cfg.base_url.clone())?;
    info!("templates and translation tables loaded");

    let state = Arc::new(AppState {
        config: Arc::new(cfg.clone()),
        store,
        pages: Arc::new(pages),
    });

    // ── 5. HTTP server with graceful shutdown ──────────────────────────────────
    let app = routes::build(Arc::clone(&state));
    let addr: SocketAddr = cfg.bind_address.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shangshu-server stopped");
    Ok(())
}

/// Returns a future that resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c   => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
