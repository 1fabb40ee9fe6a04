//! seedbed - provision and seed the MongoDB source database
//!
//! `seedbed init` runs the one-shot bootstrap sequence (application user,
//! collections, indexes, seed documents) and prints a short confirmation.
//! `seedbed check` inspects an existing deployment without writing to it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seedbed_core::{inspect, Config, Database, Initializer};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seedbed")]
#[command(about = "Provision and seed the MongoDB source database")]
#[command(version)]
struct Args {
    /// Path to the config file (default: ~/.config/seedbed/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full initialization sequence against an empty deployment
    Init,
    /// Report collections, document counts, and a sample document
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path).context("failed to load configuration")?,
        None => Config::load().context("failed to load configuration")?,
    };
    let _log_guard = seedbed_core::logging::init(&config.logging).ok();

    match args.command {
        Command::Init => run_init(&config).await,
        Command::Check => run_check(&config).await,
    }
}

async fn run_init(config: &Config) -> Result<()> {
    config
        .validate()
        .context("configuration is incomplete for init")?;

    let db = Database::connect(&config.mongo)
        .await
        .context("failed to connect to MongoDB")?;

    let report = Initializer::new(db)
        .run(&config.app_user)
        .await
        .context("initialization failed")?;

    println!("MongoDB initialized successfully!");
    println!("Created collections: {}", report.collections.join(", "));
    println!("Inserted seed data for feedback and sessions");

    tracing::info!(
        database = %report.database,
        app_user = %report.app_user,
        indexes = report.indexes_created,
        "init finished"
    );
    Ok(())
}

async fn run_check(config: &Config) -> Result<()> {
    let db = Database::connect(&config.mongo)
        .await
        .context("failed to connect to MongoDB")?;

    let report = inspect(&db).await.context("inspection failed")?;

    println!("Database: {}", report.database);

    if report.collections.is_empty() {
        println!("No collections found - run `seedbed init` first.");
        return Ok(());
    }

    println!("Collections:");
    for (name, count) in &report.collections {
        println!("  {:<20} {:>6} documents", name, count);
    }

    if !report.has_expected_layout() {
        println!("Warning: expected layout is incomplete.");
    }

    if let Some(sample) = &report.sample_feedback {
        println!("Sample feedback document:");
        println!("{}", serde_json::to_string_pretty(sample)?);
    }

    Ok(())
}
