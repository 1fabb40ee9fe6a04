//! One-shot initialization of the source database
//!
//! The sequence is fixed: provision the application user, create the
//! collections, create the indexes, insert the seed documents. There is no
//! rollback and no retry; the first error aborts the run and leaves whatever
//! was already written in place.
//!
//! Re-running against an initialized database fails deterministically on the
//! duplicate user, which is the first write in the sequence.

use crate::config::AppUserConfig;
use crate::db::seed::SeedCounts;
use crate::db::{provision, schema, seed, Database};
use crate::error::Result;

/// Outcome of an initialization run.
#[derive(Debug, Clone)]
pub struct InitReport {
    /// Name of the initialized database
    pub database: String,
    /// Username of the created application credential
    pub app_user: String,
    /// Collections created, in creation order
    pub collections: Vec<&'static str>,
    /// Total indexes created across all collections
    pub indexes_created: usize,
    /// Seed documents inserted per collection
    pub seed: SeedCounts,
}

/// Runs the initialization sequence against a connected deployment.
pub struct Initializer {
    db: Database,
}

impl Initializer {
    /// Create an initializer over a verified connection.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Execute the full sequence and report what was written.
    pub async fn run(&self, app_user: &AppUserConfig) -> Result<InitReport> {
        tracing::info!(database = %self.db.name(), "starting initialization");

        provision::create_app_user(&self.db, app_user).await?;
        schema::create_collections(&self.db).await?;
        let indexes_created = schema::create_indexes(&self.db).await?;
        let seed = seed::insert_seed_data(&self.db).await?;

        let report = InitReport {
            database: self.db.name().to_string(),
            app_user: app_user.username.clone(),
            collections: schema::collection_names(),
            indexes_created,
            seed,
        };

        tracing::info!(
            database = %report.database,
            collections = report.collections.len(),
            indexes = report.indexes_created,
            "initialization complete"
        );
        Ok(report)
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
