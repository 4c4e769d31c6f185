//! Diagnostics report for the document store.
//!
//! Building the report never fails: every store problem is folded into the
//! `database` field.

use tracing::{instrument, warn};

use crate::{
    base::{config::Config, types::Diagnostics},
    service::db::DbConnection,
};

/// Maximum number of collections listed.
const MAX_COLLECTIONS: usize = 10;

/// Maximum number of error characters shown.
const MAX_ERROR_CHARS: usize = 50;

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Describes the backend and the state of its document store.
#[instrument(skip_all)]
pub async fn diagnostics(config: &Config, db: &DbConnection) -> Diagnostics {
    let mut report = Diagnostics {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: String::new(),
        database_name: String::new(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match db {
        DbConnection::Ready(db) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();

            match db.list_collections().await {
                Ok(collections) => {
                    report.collections = collections.into_iter().take(MAX_COLLECTIONS).collect();
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(err) => {
                    warn!("Listing collections failed: {}", err);
                    report.database = format!("⚠️  Connected but Error: {}", truncate(&err.to_string()));
                }
            }
        }
        DbConnection::Disabled => report.database = "⚠️  Available but not initialized".to_string(),
        DbConnection::Failed(err) => report.database = format!("❌ Error: {}", truncate(err)),
    }

    report.database_url = if config.store_url().is_some() { "✅ Set" } else { "❌ Not Set" }.to_string();
    report.database_name = config.store_name().unwrap_or("❌ Not Set").to_string();

    report
}
