//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, path::PathBuf, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default bind address.
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default listen port.
fn default_port() -> u16 {
    8000
}

/// Default SurrealDB namespace.
fn default_database_namespace() -> String {
    "iventice".to_string()
}

/// Permissive CORS is on unless switched off.
fn default_cors_permissive() -> bool {
    true
}

/// Configuration for the backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Address to bind the HTTP server to (`HOST`).
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Document store endpoint (`DATABASE_URL`).
    /// Any SurrealDB engine URL, e.g. `ws://localhost:8000` or `mem://`.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Database name (`DATABASE_NAME`).
    #[serde(default)]
    pub database_name: Option<String>,
    /// Database namespace (`DATABASE_NAMESPACE`).
    #[serde(default = "default_database_namespace")]
    pub database_namespace: String,
    /// Root username for the store (`DATABASE_USERNAME`).
    #[serde(default)]
    pub database_username: Option<String>,
    /// Root password for the store (`DATABASE_PASSWORD`).
    #[serde(default)]
    pub database_password: Option<String>,
    /// Optional knowledge base file replacing the builtin content (`KNOWLEDGE_PATH`).
    #[serde(default)]
    pub knowledge_path: Option<PathBuf>,
    /// Whether to allow any origin, method and header (`CORS_PERMISSIVE`).
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            database_name: None,
            database_namespace: default_database_namespace(),
            database_username: None,
            database_password: None,
            knowledge_path: None,
            cors_permissive: default_cors_permissive(),
        }
    }
}

impl ConfigInner {
    /// Clears optional settings that are present but blank.
    fn without_blanks(self) -> Self {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            database_url: present(self.database_url),
            database_name: present(self.database_name),
            database_username: present(self.database_username),
            database_password: present(self.database_password),
            knowledge_path: self.knowledge_path.filter(|p| !p.as_os_str().is_empty()),
            ..self
        }
    }

    /// The store URL, when one is configured and not blank.
    pub fn store_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// The database name, when one is configured and not blank.
    pub fn store_name(&self) -> Option<&str> {
        self.database_name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        // Environment wins over the file; empty variables count as unset.
        cfg = cfg.add_source(config::Environment::default().try_parsing(true).ignore_empty(true));

        let inner: ConfigInner = cfg.build()?.try_deserialize()?;

        if inner.port == 0 {
            return Err(anyhow::anyhow!("Port must be between 1 and 65535."));
        }

        Ok(Config {
            inner: Arc::new(inner.without_blanks()),
        })
    }

    /// The `host:port` pair to bind to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
