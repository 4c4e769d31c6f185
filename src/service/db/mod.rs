use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::base::types::Res;

pub mod surreal;

// Traits.

/// Generic document store trait that clients must implement.
///
/// The backend only ever writes whole documents and asks the store to describe
/// itself for diagnostics. Implementing this trait allows different document
/// stores to back the contact form.
#[async_trait]
pub trait GenericDbClient: Send + Sync + 'static {
    /// Name of the database the client is bound to.
    fn name(&self) -> &str;

    /// Writes `payload` as a new document in `collection` and returns its id.
    ///
    /// There is no retry; a failure is reported to the caller as-is.
    async fn create_document(&self, collection: &str, payload: &Value) -> Res<String>;

    /// Lists the collections that exist in the database.
    async fn list_collections(&self) -> Res<Vec<String>>;
}

// Structs.

/// Document store client for the backend.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct DbClient {
    /// The database client instance.
    pub inner: Arc<dyn GenericDbClient>,
}

impl Deref for DbClient {
    type Target = dyn GenericDbClient;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl DbClient {
    pub fn new(inner: Arc<dyn GenericDbClient>) -> Self {
        Self { inner }
    }
}

/// The state of the store connection made at startup.
#[derive(Clone)]
pub enum DbConnection {
    /// No `DATABASE_URL` was configured.
    Disabled,
    /// Connecting failed; holds the error message.
    Failed(String),
    /// Connected and ready for use.
    Ready(DbClient),
}

impl DbConnection {
    /// The client, when connected.
    pub fn client(&self) -> Option<&DbClient> {
        match self {
            DbConnection::Ready(db) => Some(db),
            _ => None,
        }
    }
}
