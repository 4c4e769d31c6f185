//! Library root for `iventice-backend`.
//!
//! The backend behind the iVentice consultancy site. It exposes:
//! - A health check and a document store diagnostics report
//! - A contact form endpoint that stores submissions in SurrealDB
//! - A rule-based FAQ chat answered from a curated knowledge base
//!
//! The chat is deterministic keyword matching over static content; there is no
//! model and no conversation state. The document store sits behind a trait so
//! that other stores (or mocks) can be used.

pub mod base;
pub mod http;
pub mod interaction;
pub mod responder;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the backend runtime:
/// - Loads the knowledge base and builds the responder
/// - Connects to the document store, when one is configured
/// - Serves HTTP until Ctrl-C
pub async fn start(config: Config) -> Void {
    info!("Starting iventice-backend ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
