//! SurrealDB implementation of the document store.

use std::collections::BTreeMap;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use surrealdb::{
    Surreal,
    engine::any::{self, Any},
    opt::auth::Root,
    sql::Thing,
};
use tracing::{info, instrument};

use super::{DbClient, GenericDbClient};
use crate::base::{config::Config, types::Res};

/// Database used when `DATABASE_NAME` is unset.
const DEFAULT_DATABASE: &str = "iventice";

/// The id of a freshly created record; everything else is ignored.
#[derive(Debug, Deserialize)]
struct CreatedRecord {
    id: Thing,
}

// Extra methods on `DbClient` applied by the surreal implementation.

impl DbClient {
    /// Connects to the store named by `DATABASE_URL`.
    pub async fn surreal(config: &Config) -> Res<Self> {
        let url = config.store_url().ok_or_else(|| anyhow!("`DATABASE_URL` is not set."))?;
        let database = config.store_name().unwrap_or(DEFAULT_DATABASE);

        let credentials = match (config.database_username.as_deref(), config.database_password.as_deref()) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        };

        let client = SurrealDbClient::connect(url, &config.database_namespace, database, credentials).await?;

        Ok(Self::new(std::sync::Arc::new(client)))
    }

    /// Creates an in-memory store, mostly useful for tests.
    pub async fn surreal_memory() -> Res<Self> {
        let client = SurrealDbClient::connect("mem://", "test", "test", None).await?;

        Ok(Self::new(std::sync::Arc::new(client)))
    }
}

/// SurrealDB document store.
#[derive(Clone)]
pub struct SurrealDbClient {
    db: Surreal<Any>,
    database: String,
}

impl SurrealDbClient {
    /// Connects to `url`, signs in as root when credentials are given, and selects the namespace and database.
    #[instrument(skip(credentials))]
    pub async fn connect(url: &str, namespace: &str, database: &str, credentials: Option<(&str, &str)>) -> Res<Self> {
        let db = any::connect(url).await?;

        if let Some((username, password)) = credentials {
            db.signin(Root { username, password }).await?;
        }

        db.use_ns(namespace).use_db(database).await?;

        info!("Database initialized successfully.");

        Ok(Self {
            db,
            database: database.to_string(),
        })
    }
}

#[async_trait]
impl GenericDbClient for SurrealDbClient {
    fn name(&self) -> &str {
        &self.database
    }

    #[instrument(skip(self, payload))]
    async fn create_document(&self, collection: &str, payload: &Value) -> Res<String> {
        let created: Option<CreatedRecord> = self.db.create(collection).content(payload.clone()).await?;
        let record = created.ok_or_else(|| anyhow!("The store did not return the created `{collection}` record."))?;

        let id = record.id.id.to_raw();
        info!("Created `{}` record `{}`.", collection, id);

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_collections(&self) -> Res<Vec<String>> {
        let mut response = self.db.query("INFO FOR DB").await?;
        let tables: Option<BTreeMap<String, Value>> = response.take((0, "tables"))?;

        Ok(tables.map(|t| t.into_keys().collect()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn create_then_list() {
        let db = DbClient::surreal_memory().await.unwrap();

        assert_eq!(db.name(), "test");
        assert!(db.list_collections().await.unwrap().is_empty());

        let id = db.create_document("contactmessage", &json!({ "name": "Jo", "email": "jo@example.com" })).await.unwrap();
        assert!(!id.is_empty());

        let other = db.create_document("contactmessage", &json!({ "name": "Al" })).await.unwrap();
        assert_ne!(id, other);

        assert_eq!(db.list_collections().await.unwrap(), vec!["contactmessage".to_string()]);
    }

    #[tokio::test]
    async fn surreal_requires_url() {
        let config = Config::from(crate::base::config::ConfigInner::default());

        assert!(DbClient::surreal(&config).await.is_err());
    }
}
