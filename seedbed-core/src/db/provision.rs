//! Application-user provisioning
//!
//! The initializer creates one application-scoped credential on the target
//! database: a `readWrite` grant on that database and nothing else. The
//! password comes from configuration; it is never stored in this crate.

use crate::config::AppUserConfig;
use crate::db::Database;
use crate::error::{Error, Result};
use mongodb::bson::{doc, Document};

/// Build the `createUser` command document.
///
/// Kept separate from the network call so the command shape is testable.
fn create_user_command(user: &AppUserConfig, db_name: &str) -> Result<Document> {
    let password = user.password.as_deref().ok_or_else(|| {
        Error::Config(
            "app_user.password is not set; put it in the config file or SEEDBED_APP_PASSWORD"
                .to_string(),
        )
    })?;

    Ok(doc! {
        "createUser": &user.username,
        "pwd": password,
        "roles": [
            { "role": "readWrite", "db": db_name },
        ],
    })
}

/// Create the application user on the target database.
///
/// Fails if the user already exists; the server error propagates unchanged.
pub async fn create_app_user(db: &Database, user: &AppUserConfig) -> Result<()> {
    let command = create_user_command(user, db.name())?;

    db.target().run_command(command).await?;

    tracing::info!(
        username = %user.username,
        database = %db.name(),
        "created application user with readWrite grant"
    );
    Ok(())
}
