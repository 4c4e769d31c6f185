//! Runtime services and shared state for the backend.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::{
    base::{
        config::Config,
        knowledge::KnowledgeBase,
        types::{Res, Void},
    },
    http,
    responder::Responder,
    service::db::{DbClient, DbConnection},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, the responder (and its knowledge base),
/// and the document store connection. It is designed to be trivially cloneable,
/// allowing it to be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The FAQ responder.
    pub responder: Responder,
    /// The document store connection.
    pub db: DbConnection,
}

impl Runtime {
    /// Create a new runtime instance.
    ///
    /// A store that cannot be reached does not stop startup; the failure is
    /// reported by the diagnostics endpoint instead.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Load the knowledge base.
        let knowledge = match &config.knowledge_path {
            Some(path) => {
                info!("Loading knowledge base from `{}` ...", path.display());
                KnowledgeBase::load(path)?
            }
            None => KnowledgeBase::builtin()?,
        };

        let responder = Responder::new(Arc::new(knowledge));

        // Connect to the document store.
        let db = if config.store_url().is_some() {
            match DbClient::surreal(&config).await {
                Ok(db) => DbConnection::Ready(db),
                Err(err) => {
                    error!("Could not connect to the document store: {}", err);
                    DbConnection::Failed(err.to_string())
                }
            }
        } else {
            warn!("`DATABASE_URL` is not set; contact messages cannot be stored.");
            DbConnection::Disabled
        };

        Ok(Self { config, responder, db })
    }

    /// Start serving HTTP requests.
    pub async fn start(&self) -> Void {
        http::serve(self.clone()).await
    }
}
