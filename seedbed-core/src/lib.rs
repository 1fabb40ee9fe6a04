//! # seedbed-core
//!
//! Core library for seedbed - bootstrap tooling for the MongoDB source
//! database of an e-commerce analytics stack.
//!
//! This library provides:
//! - The declarative collection/index layout the downstream consumers expect
//! - One-shot initialization (user, collections, indexes, seed documents)
//! - Read-only deployment inspection
//! - Configuration management and logging infrastructure
//!
//! ## Behavior contract
//!
//! Initialization is deliberately **not** idempotent: it provisions a user,
//! strict-creates collections, and inserts seed rows, so a second run against
//! the same database fails on the first duplicate. The first error aborts the
//! sequence with nothing rolled back.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seedbed_core::{Config, Database, Initializer};
//!
//! # async fn example() -> seedbed_core::Result<()> {
//! let config = Config::load()?;
//! config.validate()?;
//!
//! let db = Database::connect(&config.mongo).await?;
//! let report = Initializer::new(db).run(&config.app_user).await?;
//! assert_eq!(report.collections.len(), 4);
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use check::{inspect, CheckReport};
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use init::{InitReport, Initializer};
pub use types::*;

// Public modules
pub mod check;
pub mod config;
pub mod db;
pub mod error;
pub mod init;
pub mod logging;
pub mod types;
