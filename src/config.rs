//! Service configuration.

use std::env;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration, loaded once at startup.
///
/// Every value has a documented default and can be overridden via a
/// `TODO_API_*` environment variable; the CLI flags in [`crate::cli`] take
/// precedence over both.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection URI (`TODO_API_MONGO_URI`)
    pub mongo_uri: String,
    /// Database name (`TODO_API_DATABASE`)
    pub database: String,
    /// Collection name (`TODO_API_COLLECTION`)
    pub collection: String,
    /// Host address to bind to (`TODO_API_HOST`)
    pub host: IpAddr,
    /// Port to listen on (`TODO_API_PORT`)
    pub port: u16,
    /// Timeout for the initial connect and ping (`TODO_API_CONNECT_TIMEOUT_SECS`)
    pub connect_timeout: Duration,
    /// Timeout for each store operation at request time (`TODO_API_OP_TIMEOUT_SECS`)
    pub op_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: "mongodb://localhost:27017".to_string(),
            database: "gotodo".to_string(),
            collection: "todos".to_string(),
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            connect_timeout: Duration::from_secs(10),
            op_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Build a configuration from defaults overlaid with `TODO_API_*`
    /// environment variables. Unset or unparsable values keep the default.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(uri) = env::var("TODO_API_MONGO_URI") {
            config.mongo_uri = uri;
        }
        if let Ok(database) = env::var("TODO_API_DATABASE") {
            config.database = database;
        }
        if let Ok(collection) = env::var("TODO_API_COLLECTION") {
            config.collection = collection;
        }
        if let Some(host) = env_parsed("TODO_API_HOST") {
            config.host = host;
        }
        if let Some(port) = env_parsed("TODO_API_PORT") {
            config.port = port;
        }
        if let Some(secs) = env_parsed("TODO_API_CONNECT_TIMEOUT_SECS") {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_parsed("TODO_API_OP_TIMEOUT_SECS") {
            config.op_timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_mongo_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongo_uri = uri.into();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Read and parse an environment variable, ignoring unset or unparsable
/// values.
fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
