//! Command-line interface.

use std::io::Write;

use clap::{Parser, Subcommand};
use serde_json::json;

use crate::entities::ContactStore;
use crate::entities::dao::contact::format_timestamp;

#[derive(Debug, Parser)]
#[command(name = "shangshu-server", version, about = "Shangshu Technology site server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Print recent contact submissions as JSON lines, newest first.
    Contacts {
        /// Maximum number of submissions to print.
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
}

/// Write the newest `limit` submissions to `out`, one JSON object per line.
/// Returns the number of rows written.
pub async fn export_contacts(
    store: &impl ContactStore,
    limit: i64,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let rows = store.list_contacts(limit).await?;
    for row in &rows {
        let line = json!({
            "id": row.id,
            "name": row.name,
            "email": row.email,
            "phone": row.phone,
            "message": row.message,
            "created_at": format_timestamp(&row.created_at),
        });
        writeln!(out, "{line}")?;
    }
    Ok(rows.len())
}
