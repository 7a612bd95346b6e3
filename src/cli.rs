//! Command-line entry point for the API server.

use std::net::IpAddr;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use crate::api;
use crate::config::Config;
use crate::db::MongoStore;

/// Todo HTTP API server
#[derive(Parser)]
#[command(name = "todo-api")]
#[command(author, version, about = "Todo HTTP API server", long_about = None)]
pub struct Cli {
    /// Override the MongoDB URI (default: TODO_API_MONGO_URI env or mongodb://localhost:27017)
    #[arg(long)]
    pub mongo_uri: Option<String>,

    /// Override the database name (default: TODO_API_DATABASE env or "gotodo")
    #[arg(long)]
    pub database: Option<String>,

    /// Override the collection name (default: TODO_API_COLLECTION env or "todos")
    #[arg(long)]
    pub collection: Option<String>,

    /// Override the bind address (default: TODO_API_HOST env or 0.0.0.0)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Override the listen port (default: TODO_API_PORT env or 8080)
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Resolve the effective configuration. Precedence: CLI flag > env var
    /// > default.
    fn config(&self) -> Config {
        let mut config = Config::new();
        if let Some(uri) = &self.mongo_uri {
            config = config.with_mongo_uri(uri);
        }
        if let Some(database) = &self.database {
            config = config.with_database(database);
        }
        if let Some(collection) = &self.collection {
            config = config.with_collection(collection);
        }
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        config
    }
}

pub async fn run() -> Result<()> {
    api::init_tracing();

    let cli = Cli::parse();
    let config = cli.config();

    // An unreachable store is fatal at startup; no retry, no degraded mode.
    let store = MongoStore::connect(&config).await?;

    api::serve(&config, store).await.into_diagnostic()
}
