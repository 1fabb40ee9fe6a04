//! Error types for seedbed-core

use thiserror::Error;

/// Main error type for the seedbed-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Driver or server error from MongoDB
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed timestamp literal in seed data
    #[error("invalid timestamp in seed data: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Result type alias for seedbed-core
pub type Result<T> = std::result::Result<T, Error>;
