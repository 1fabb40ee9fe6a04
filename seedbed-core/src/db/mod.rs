//! MongoDB access layer
//!
//! This module provides the storage boundary:
//! - Connection management with ping verification
//! - Application-user provisioning
//! - Collection and index layout
//! - Seed-document insertion

pub mod provision;
pub mod schema;
pub mod seed;

use crate::config::MongoConfig;
use crate::error::Result;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;

/// Handle to the target database on a verified connection.
pub struct Database {
    client: Client,
    db: mongodb::Database,
}

impl Database {
    /// Connect to the deployment described by `config` and verify it is
    /// reachable with a `ping` against the `admin` database.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout =
            Some(Duration::from_secs(config.server_selection_timeout_secs));

        let client = Client::with_options(options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        tracing::info!(database = %config.database, "connected to MongoDB");

        let db = client.database(&config.database);
        Ok(Self { client, db })
    }

    /// The underlying client, for callers that need another database handle.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The target database handle.
    pub fn target(&self) -> &mongodb::Database {
        &self.db
    }

    /// Name of the target database.
    pub fn name(&self) -> &str {
        self.db.name()
    }
}
